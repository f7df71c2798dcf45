//! HTTP client types for Shasta API communication.
//!
//! # Overview
//!
//! - [`Transport`]: The seam every resource operation sends requests through
//! - [`HttpClient`]: The reqwest-backed [`Transport`]
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH)
//! - [`DataType`]: How request data is encoded
//! - [`HttpError`]: Transport faults
//!
//! # Retry Behavior
//!
//! None. Every request is attempted exactly once and a failure is reported to
//! the caller immediately. Retry policy, if any, belongs to the application.

mod errors;
mod form;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use form::form_pairs;
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::Transport;
