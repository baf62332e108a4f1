//! Client configuration options.

use std::time::Duration;

use crate::{ApiVersion, Environment};

/// Configuration for the tastytrade client.
///
/// # Example
///
/// ```
/// use tastytrade::{ClientConfig, Environment};
/// use std::time::Duration;
///
/// let config = ClientConfig::new(Environment::Sandbox)
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
///
/// assert_eq!(config.base_url(), "https://api.cert.tastyworks.com");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Which deployment to talk to
    pub environment: Environment,
    /// Request timeout enforced by the HTTP client
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Optional API version to pin to
    pub api_version: Option<ApiVersion>,
    /// Replaces the environment's base URL (proxies, mock servers)
    pub base_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            timeout: Duration::from_secs(30),
            user_agent: format!("tastytrade/{} (Rust)", env!("CARGO_PKG_VERSION")),
            api_version: None,
            base_url: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for `environment` with default values.
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            ..Self::default()
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Pin to a specific API version.
    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Send requests to `base_url` instead of the environment's host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// The base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        match self.base_url.as_deref() {
            Some(url) => url.trim_end_matches('/'),
            None => self.environment.api_base_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.environment, Environment::Production);
        assert!(config.api_version.is_none());
        assert_eq!(config.base_url(), "https://api.tastyworks.com");
        assert!(config.user_agent.starts_with("tastytrade/"));
    }

    #[test]
    fn test_base_url_override() {
        let config =
            ClientConfig::new(Environment::Sandbox).with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
        assert_eq!(config.environment, Environment::Sandbox);
    }
}
