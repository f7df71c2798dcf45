//! HTTP response type for the Shasta SDK.

use std::collections::HashMap;

/// An HTTP response from the Shasta API.
///
/// Non-2xx responses are represented as ordinary values; deciding what an
/// error status means is left to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_for_2xx_codes() {
        for code in [200, 201, 204, 299] {
            assert!(HttpResponse::new(code, HashMap::new(), json!({})).is_ok());
        }
    }

    #[test]
    fn test_is_not_ok_for_other_codes() {
        for code in [100, 301, 400, 404, 422, 500] {
            assert!(!HttpResponse::new(code, HashMap::new(), json!({})).is_ok());
        }
    }

    #[test]
    fn test_request_id_from_headers() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-42".to_string()]);
        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("req-42"));

        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert!(response.request_id().is_none());
    }
}
