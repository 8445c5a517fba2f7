//! Connection configuration for the search engine client.
//!
//! Credentials are explicit values on the config, injected by the caller
//! at construction time. The client itself never reads the process
//! environment; binaries that want environment-driven configuration use
//! [`ConnectionConfig::from_env`].

use std::env;
use std::time::Duration;

use crate::errors::SearchError;

/// Environment variable holding the search engine endpoint URL.
pub const ENV_ENDPOINT: &str = "ELASTIC_URL";

/// Environment variable holding the basic-auth username.
pub const ENV_USERNAME: &str = "ELASTIC_USER";

/// Environment variable holding the authentication secret. Required.
pub const ENV_PASSWORD: &str = "ELASTIC_PASSWORD";

/// Environment variable that, when set to `1` or `true`, disables TLS
/// certificate verification.
pub const ENV_INSECURE: &str = "ELASTIC_INSECURE";

/// Default endpoint used when `ELASTIC_URL` is not set.
const DEFAULT_ENDPOINT: &str = "https://localhost:9200";

/// Default username used when `ELASTIC_USER` is not set.
const DEFAULT_USERNAME: &str = "elastic";

/// Connection settings for a search engine endpoint.
///
/// TLS certificate verification is enabled by default; disabling it is an
/// explicit opt-out intended for development and self-signed setups only.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Endpoint URL, e.g. `https://localhost:9200`.
    pub endpoint: String,
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password. Must be non-empty.
    pub password: String,
    /// Whether to verify the endpoint's TLS certificate.
    pub verify_tls: bool,
    /// Per-request timeout. The transport default applies when unset.
    pub request_timeout: Option<Duration>,
}

impl ConnectionConfig {
    /// Create a config with TLS verification enabled and no explicit
    /// request timeout.
    pub fn new(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: username.into(),
            password: password.into(),
            verify_tls: true,
            request_timeout: None,
        }
    }

    /// Disable TLS certificate verification.
    ///
    /// Only use this against development or self-signed endpoints; the
    /// connection is open to man-in-the-middle interception without it.
    pub fn without_tls_verification(mut self) -> Self {
        self.verify_tls = false;
        self
    }

    /// Set a per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build a config from `ELASTIC_*` environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ELASTIC_URL`: endpoint URL (default: https://localhost:9200)
    /// - `ELASTIC_USER`: basic-auth username (default: elastic)
    /// - `ELASTIC_PASSWORD`: authentication secret (required)
    /// - `ELASTIC_INSECURE`: set to `1` or `true` to skip TLS verification
    ///
    /// # Returns
    ///
    /// * `Ok(ConnectionConfig)` - Settings assembled from the environment
    /// * `Err(SearchError::ConfigurationError)` - If the password variable
    ///   is absent or empty
    pub fn from_env() -> Result<Self, SearchError> {
        let password = env::var(ENV_PASSWORD).unwrap_or_default();
        if password.is_empty() {
            return Err(SearchError::configuration(format!(
                "{} environment variable not set",
                ENV_PASSWORD
            )));
        }

        let endpoint = env::var(ENV_ENDPOINT).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let username = env::var(ENV_USERNAME).unwrap_or_else(|_| DEFAULT_USERNAME.to_string());

        let mut config = Self::new(endpoint, username, password);
        if matches!(env::var(ENV_INSECURE).as_deref(), Ok("1") | Ok("true")) {
            config = config.without_tls_verification();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_enabled_by_default() {
        let config = ConnectionConfig::new("https://localhost:9200", "elastic", "secret");

        assert!(config.verify_tls);
        assert!(config.request_timeout.is_none());

        let config = config.without_tls_verification();
        assert!(!config.verify_tls);
    }

    #[test]
    fn test_request_timeout() {
        let config = ConnectionConfig::new("https://localhost:9200", "elastic", "secret")
            .with_request_timeout(Duration::from_secs(30));

        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }

    // Single test for all from_env scenarios: the process environment is
    // shared across test threads, so the variable must not be touched
    // from more than one test.
    #[test]
    fn test_from_env() {
        env::remove_var(ENV_PASSWORD);
        let result = ConnectionConfig::from_env();
        assert!(matches!(result, Err(SearchError::ConfigurationError(_))));

        env::set_var(ENV_PASSWORD, "");
        let result = ConnectionConfig::from_env();
        assert!(matches!(result, Err(SearchError::ConfigurationError(_))));

        env::set_var(ENV_PASSWORD, "secret");
        let config = ConnectionConfig::from_env().unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.username, DEFAULT_USERNAME);
        assert_eq!(config.password, "secret");
        assert!(config.verify_tls);

        env::set_var(ENV_INSECURE, "true");
        let config = ConnectionConfig::from_env().unwrap();
        assert!(!config.verify_tls);

        env::remove_var(ENV_PASSWORD);
        env::remove_var(ENV_INSECURE);
    }
}
