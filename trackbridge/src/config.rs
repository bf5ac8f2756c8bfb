//! Tracker connection configuration
//!
//! Connection settings for the remote tracker are read from the
//! environment so the server can run unattended under an MCP host.

use std::time::Duration;

use url::Url;

use crate::error::{Result, TrackbridgeError};

/// Default GraphQL endpoint of the remote tracker
pub const DEFAULT_API_URL: &str = "https://api.linear.app/graphql";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "TRACKBRIDGE_API_KEY";

/// Environment variable overriding the GraphQL endpoint
pub const API_URL_VAR: &str = "TRACKBRIDGE_API_URL";

/// Environment variable overriding the request timeout (seconds)
pub const TIMEOUT_VAR: &str = "TRACKBRIDGE_TIMEOUT_SECS";

/// Connection settings for the remote tracker
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// API key sent in the Authorization header
    pub api_key: String,
    /// GraphQL endpoint URL
    pub endpoint: Url,
    /// Request timeout
    pub timeout: Duration,
}

impl TrackerConfig {
    /// Build a configuration from the environment.
    ///
    /// Requires `TRACKBRIDGE_API_KEY`; `TRACKBRIDGE_API_URL` and
    /// `TRACKBRIDGE_TIMEOUT_SECS` are optional overrides.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| TrackbridgeError::Config(format!("{API_KEY_VAR} not set")))?;

        let endpoint = std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout_secs = match std::env::var(TIMEOUT_VAR) {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                TrackbridgeError::Config(format!("{TIMEOUT_VAR} is not a valid number: {raw}"))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Self::new(api_key, &endpoint, Duration::from_secs(timeout_secs))
    }

    /// Build a configuration from explicit values, validating the endpoint.
    pub fn new(api_key: impl Into<String>, endpoint: &str, timeout: Duration) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TrackbridgeError::Config("API key is empty".to_string()));
        }

        let endpoint = Url::parse(endpoint)
            .map_err(|e| TrackbridgeError::Config(format!("Invalid endpoint URL: {e}")))?;
        if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
            return Err(TrackbridgeError::Config(format!(
                "Endpoint must be http(s), got: {}",
                endpoint.scheme()
            )));
        }

        Ok(Self {
            api_key,
            endpoint,
            timeout,
        })
    }

    /// Configuration pointing at the default endpoint with an explicit key
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(
            api_key,
            DEFAULT_API_URL,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_with_api_key_defaults() {
        let config = TrackerConfig::with_api_key("lin_api_test").unwrap();
        assert_eq!(config.endpoint.as_str(), DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let result = TrackerConfig::with_api_key("   ");
        assert!(matches!(result, Err(TrackbridgeError::Config(_))));
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let result = TrackerConfig::new("key", "not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(TrackbridgeError::Config(_))));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let result = TrackerConfig::new("key", "ftp://example.com", Duration::from_secs(1));
        assert!(matches!(result, Err(TrackbridgeError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_from_env_missing_key() {
        let original = std::env::var(API_KEY_VAR).ok();
        std::env::remove_var(API_KEY_VAR);

        let result = TrackerConfig::from_env();
        assert!(matches!(result, Err(TrackbridgeError::Config(_))));

        if let Some(key) = original {
            std::env::set_var(API_KEY_VAR, key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_with_overrides() {
        let original_key = std::env::var(API_KEY_VAR).ok();
        let original_url = std::env::var(API_URL_VAR).ok();
        let original_timeout = std::env::var(TIMEOUT_VAR).ok();

        std::env::set_var(API_KEY_VAR, "lin_api_test");
        std::env::set_var(API_URL_VAR, "https://tracker.internal/graphql");
        std::env::set_var(TIMEOUT_VAR, "5");

        let config = TrackerConfig::from_env().unwrap();
        assert_eq!(config.endpoint.as_str(), "https://tracker.internal/graphql");
        assert_eq!(config.timeout, Duration::from_secs(5));

        match original_key {
            Some(v) => std::env::set_var(API_KEY_VAR, v),
            None => std::env::remove_var(API_KEY_VAR),
        }
        match original_url {
            Some(v) => std::env::set_var(API_URL_VAR, v),
            None => std::env::remove_var(API_URL_VAR),
        }
        match original_timeout {
            Some(v) => std::env::set_var(TIMEOUT_VAR, v),
            None => std::env::remove_var(TIMEOUT_VAR),
        }
    }
}
