//! Configuration types for the Shasta SDK.
//!
//! # Overview
//!
//! - [`ShastaConfig`]: The configuration struct holding all SDK settings
//! - [`ShastaConfigBuilder`]: A builder for constructing [`ShastaConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//! - [`Environment`]: The Shasta environment (live or sandbox)
//!
//! # Example
//!
//! ```rust
//! use shasta::{ShastaConfig, ApiKey, Environment};
//!
//! let config = ShastaConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .environment(Environment::Sandbox)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api-sandbox.payments.shasta.me/v1");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// The Shasta deployment the SDK talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Environment {
    /// Production payments.
    #[default]
    Live,
    /// Sandbox for integration testing.
    Sandbox,
}

impl Environment {
    /// Returns the REST base URL for this environment.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Self::Live => "https://api.payments.shasta.me/v1",
            Self::Sandbox => "https://api-sandbox.payments.shasta.me/v1",
        }
    }
}

/// Configuration for the Shasta SDK.
///
/// `ShastaConfig` is `Clone`, `Send`, and `Sync`. It is passed explicitly to
/// [`HttpClient::new`](crate::clients::HttpClient::new); the SDK keeps no
/// global client.
#[derive(Clone, Debug)]
pub struct ShastaConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl ShastaConfig {
    /// Creates a new builder for constructing a `ShastaConfig`.
    #[must_use]
    pub fn builder() -> ShastaConfigBuilder {
        ShastaConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL all resource paths are joined onto.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify ShastaConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShastaConfig>();
};

/// Builder for constructing [`ShastaConfig`] instances.
///
/// `api_key` is required. When neither `base_url` nor `environment` is set
/// the live environment is used. An explicit `base_url` wins over
/// `environment`.
#[derive(Debug, Default)]
pub struct ShastaConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    environment: Option<Environment>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl ShastaConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Overrides the base URL, e.g. to point at a mock server.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Selects the environment whose base URL is used.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`ShastaConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    /// Returns [`ConfigError::InvalidBaseUrl`] if the environment URL cannot be
    /// parsed (never the case for the built-in environments).
    pub fn build(self) -> Result<ShastaConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => BaseUrl::new(self.environment.unwrap_or_default().base_url())?,
        };

        Ok(ShastaConfig {
            api_key,
            base_url,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = ShastaConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_defaults_to_live_environment() {
        let config = ShastaConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(
            config.base_url().as_ref(),
            "https://api.payments.shasta.me/v1"
        );
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_explicit_base_url_wins_over_environment() {
        let config = ShastaConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .environment(Environment::Sandbox)
            .base_url(BaseUrl::new("http://localhost:8080/v1/").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "http://localhost:8080/v1");
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = ShastaConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .environment(Environment::Sandbox)
            .user_agent_prefix("MyShop/2.1")
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap();

        assert_eq!(
            config.base_url().as_ref(),
            "https://api-sandbox.payments.shasta.me/v1"
        );
        assert_eq!(config.user_agent_prefix(), Some("MyShop/2.1"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_config_debug_masks_api_key() {
        let config = ShastaConfig::builder()
            .api_key(ApiKey::new("sk_live_secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("ShastaConfig"));
        assert!(!debug_str.contains("sk_live_secret"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShastaConfig>();
    }
}
