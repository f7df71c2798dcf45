//! The transport seam between resources and the network.
//!
//! Resource operations never reach for a global client. They are handed a
//! `&impl Transport` and send exactly one [`HttpRequest`] through it per
//! network step. [`HttpClient`](crate::clients::HttpClient) is the production
//! implementation; tests substitute a stub.

use crate::clients::{HttpError, HttpRequest, HttpResponse};

/// Sends a single request and returns the raw response.
///
/// Implementations must return `Ok` for every response that was received,
/// whatever its status code, and reserve `Err` for faults (invalid request,
/// connection failure). Implementations must not retry.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use shasta::clients::{HttpError, HttpRequest, HttpResponse, Transport};
///
/// struct AlwaysNotFound;
///
/// impl Transport for AlwaysNotFound {
///     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(404, HashMap::new(), serde_json::json!({"message": "not found"})))
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends the request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when no response could be obtained.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).send(request).await
    }
}
