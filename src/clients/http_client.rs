//! HTTP client for Shasta API communication.
//!
//! This module provides the [`HttpClient`] type, the reqwest-backed
//! [`Transport`] used by every resource operation.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::clients::form::form_pairs;
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::{BaseUrl, ShastaConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Shasta API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and bearer authorization
/// - JSON bodies, and URL-encoded fields as query string (GET) or form body
/// - Response body parsing (empty bodies become `{}`)
///
/// Each call to [`send`](Transport::send) issues exactly one request; the
/// client never retries.
///
/// # Example
///
/// ```rust,ignore
/// use shasta::{ApiKey, ShastaConfig};
/// use shasta::clients::{HttpClient, HttpMethod, HttpRequest, Transport};
///
/// let config = ShastaConfig::builder()
///     .api_key(ApiKey::new("sk_test_123").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "customers").build().unwrap();
/// let response = client.send(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.payments.shasta.me/v1`).
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be built (e.g. TLS backend initialization failure).
    pub fn new(config: &ShastaConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Shasta Rust SDK v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.api_key().as_ref()),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Parses a response body, keeping non-JSON text under `raw_body`.
    fn parse_body(body_text: String) -> serde_json::Value {
        if body_text.trim().is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(&body_text)
            .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
    }
}

impl Transport for HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Patch => self.client.patch(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        match (&request.body, request.body_type) {
            (Some(body), Some(DataType::Json)) => {
                req_builder = req_builder
                    .header("Content-Type", DataType::Json.as_content_type())
                    .body(body.to_string());
            }
            (Some(body), Some(DataType::UrlEncoded)) => {
                let pairs =
                    form_pairs(body).ok_or(InvalidHttpRequestError::UrlEncodedBodyNotObject)?;
                req_builder = if request.http_method == HttpMethod::Get {
                    req_builder.query(&pairs)
                } else {
                    req_builder.form(&pairs)
                };
            }
            _ => {}
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "Sending request to Shasta API"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let response = HttpResponse::new(code, headers, Self::parse_body(body_text));

        if !response.is_ok() {
            tracing::warn!(
                code,
                path = %request.path,
                request_id = response.request_id().unwrap_or("-"),
                "Shasta API returned a non-success status"
            );
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, Environment};

    fn create_test_config() -> ShastaConfig {
        ShastaConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .environment(Environment::Sandbox)
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_uses_configured_base_url() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.base_url().as_ref(),
            "https://api-sandbox.payments.shasta.me/v1"
        );
    }

    #[test]
    fn test_authorization_header_uses_bearer_token() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer sk_test_123".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Shasta Rust SDK v"));
        assert!(user_agent.contains(SDK_VERSION));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ShastaConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .user_agent_prefix("MyShop/2.1")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyShop/2.1 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_parse_body_handles_empty_json_and_text() {
        assert_eq!(HttpClient::parse_body(String::new()), serde_json::json!({}));
        assert_eq!(
            HttpClient::parse_body(r#"{"id":"cus_1"}"#.to_string()),
            serde_json::json!({"id": "cus_1"})
        );
        assert_eq!(
            HttpClient::parse_body("Bad Gateway".to_string()),
            serde_json::json!({"raw_body": "Bad Gateway"})
        );
    }
}
