//! HTTP-specific error types for the Shasta SDK.
//!
//! Only faults live here: a request that could not be built or a request that
//! never produced a response. A non-2xx status is not an error at this layer,
//! it is returned as an [`HttpResponse`](crate::clients::HttpResponse).
//!
//! # Example
//!
//! ```rust,ignore
//! use shasta::clients::{HttpError, Transport};
//!
//! match client.send(request).await {
//!     Ok(response) if response.is_ok() => println!("Body: {}", response.body),
//!     Ok(response) => println!("API answered {}", response.code),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation before being sent.
///
/// # Example
///
/// ```rust
/// use shasta::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A URL-encoded body was not a JSON object.
    #[error("A url-encoded body must be a JSON object of fields.")]
    UrlEncodedBodyNotObject,
}

/// Unified error type for transport faults.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, TLS or client construction error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
