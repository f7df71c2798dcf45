//! HTTP request types for the Shasta SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder.

use std::collections::BTreeMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Shasta REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Read a record or list a collection.
    Get,
    /// Create a record.
    Post,
    /// Partially update a record.
    Patch,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Patch => write!(f, "patch"),
        }
    }
}

/// How request data is put on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON body (`application/json`).
    Json,
    /// URL-encoded fields with bracketed nested keys. Sent as the query
    /// string on GET and as a form body otherwise.
    UrlEncoded,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::UrlEncoded => "application/x-www-form-urlencoded",
        }
    }
}

/// An HTTP request to be sent through a [`Transport`](crate::clients::Transport).
///
/// `path` is relative to the configured base URL (e.g. `customers/cus_123`).
///
/// # Example
///
/// ```rust
/// use shasta::clients::{HttpRequest, HttpMethod, DataType};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "customers")
///     .body(json!({"first_name": "Ada"}))
///     .body_type(DataType::Json)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "customers");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
    /// Query parameters to URL-encode onto the request.
    pub query: Option<BTreeMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `body` is `Some` but `body_type` is `None`
    /// - `http_method` is `Post` or `Patch` but `body` is `None`
    /// - `body_type` is `UrlEncoded` but `body` is not a JSON object
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if self.body_type == Some(DataType::UrlEncoded)
            && self.body.as_ref().is_some_and(|body| !body.is_object())
        {
            return Err(InvalidHttpRequestError::UrlEncodedBodyNotObject);
        }

        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Patch) && self.body.is_none()
        {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    body_type: Option<DataType>,
    query: Option<BTreeMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            body_type: None,
            query: None,
        }
    }

    /// Sets the request body.
    ///
    /// When setting a body, you must also set the body type via [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the content type of the request body.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            body_type: self.body_type,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Patch.to_string(), "patch");
    }

    #[test]
    fn test_data_type_content_type() {
        assert_eq!(DataType::Json.as_content_type(), "application/json");
        assert_eq!(
            DataType::UrlEncoded.as_content_type(),
            "application/x-www-form-urlencoded"
        );
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "cards/card_1")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "cards/card_1");
        assert!(request.body.is_none());
        assert!(request.query.is_none());
    }

    #[test]
    fn test_verify_requires_body_for_post_and_patch() {
        let post = HttpRequest::builder(HttpMethod::Post, "customers").build();
        assert!(matches!(
            post,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));

        let patch = HttpRequest::builder(HttpMethod::Patch, "customers/cus_1").build();
        assert!(matches!(
            patch,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "patch"
        ));
    }

    #[test]
    fn test_verify_requires_body_type_when_body_present() {
        let request = HttpRequest {
            http_method: HttpMethod::Post,
            path: "files".to_string(),
            body: Some(json!({"name": "front.png"})),
            body_type: None,
            query: None,
        };

        assert!(matches!(
            request.verify(),
            Err(InvalidHttpRequestError::MissingBodyType)
        ));
    }

    #[test]
    fn test_verify_requires_object_for_url_encoded_body() {
        let request = HttpRequest::builder(HttpMethod::Get, "customers")
            .body(json!(["email", "a@b.co"]))
            .body_type(DataType::UrlEncoded)
            .build();
        assert!(matches!(
            request,
            Err(InvalidHttpRequestError::UrlEncodedBodyNotObject)
        ));

        let request = HttpRequest::builder(HttpMethod::Get, "customers")
            .body(json!({"email": "a@b.co"}))
            .body_type(DataType::UrlEncoded)
            .build();
        assert!(request.is_ok());
    }

    #[test]
    fn test_builder_with_query_params() {
        let request = HttpRequest::builder(HttpMethod::Get, "cards")
            .query_param("customer_id", "cus_1")
            .query_param("limit", "10")
            .build()
            .unwrap();

        let query = request.query.unwrap();
        assert_eq!(query.get("customer_id"), Some(&"cus_1".to_string()));
        assert_eq!(query.get("limit"), Some(&"10".to_string()));
    }
}
