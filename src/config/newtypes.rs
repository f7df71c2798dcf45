//! Validated newtype wrappers for configuration values.
//!
//! Invalid values are rejected on construction with a [`ConfigError`].

use crate::error::ConfigError;
use std::fmt;

/// A validated Shasta API key.
///
/// The key is non-empty and masked in debug output so that it never ends up
/// in logs.
///
/// # Example
///
/// ```rust
/// use shasta::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty or whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated REST base URL.
///
/// The URL must carry an alphabetic scheme and a non-empty host. Trailing
/// slashes are removed so resource paths can be joined with a single `/`.
///
/// # Example
///
/// ```rust
/// use shasta::BaseUrl;
///
/// let url = BaseUrl::new("https://api.payments.shasta.me/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.payments.shasta.me/v1");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.payments.shasta.me");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme or host,
    /// or carries a query string or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(invalid());
        }

        if url.contains(['?', '#']) {
            return Err(invalid());
        }

        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins a relative resource path onto this base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(ApiKey::new("   "), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("sk_test_123").unwrap();
        let debug_output = format!("{key:?}");
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("sk_test_123"));
    }

    #[test]
    fn test_base_url_trims_trailing_slashes() {
        let url = BaseUrl::new("http://127.0.0.1:4010//").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:4010");
        assert_eq!(url.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_base_url_rejects_invalid_values() {
        assert!(BaseUrl::new("").is_err());
        assert!(BaseUrl::new("api.payments.shasta.me").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("ht tp://host").is_err());
        assert!(BaseUrl::new("https://host/v1?debug=1").is_err());
    }

    #[test]
    fn test_base_url_join() {
        let url = BaseUrl::new("https://api.payments.shasta.me/v1").unwrap();
        assert_eq!(
            url.join("customers"),
            "https://api.payments.shasta.me/v1/customers"
        );
        assert_eq!(
            url.join("/cards/card_1"),
            "https://api.payments.shasta.me/v1/cards/card_1"
        );
    }
}
