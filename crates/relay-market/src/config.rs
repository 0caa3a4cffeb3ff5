//! Configuration for the Twelve Data market-data provider

use std::time::Duration;

/// Default Twelve Data REST endpoint
pub const DEFAULT_TWELVE_DATA_API_BASE: &str = "https://api.twelvedata.com";

/// Connection settings for the Twelve Data API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwelveDataConfig {
    /// API key sent as the `apikey` query parameter
    pub api_key: String,

    /// Base URL, without trailing endpoint path
    pub api_base: String,

    /// Request timeout; `None` keeps the transport default
    pub request_timeout: Option<Duration>,
}

impl Default for TwelveDataConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: DEFAULT_TWELVE_DATA_API_BASE.to_string(),
            request_timeout: None,
        }
    }
}

impl TwelveDataConfig {
    /// Create a config with the given API key and default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Set a custom base URL (a proxy or a local stub)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Full URL of an endpoint such as `quote`
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{name}", self.api_base.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TwelveDataConfig::default();
        assert_eq!(config.api_base, "https://api.twelvedata.com");
        assert!(config.api_key.is_empty());
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn test_builder_methods() {
        let config = TwelveDataConfig::new("key")
            .with_api_base("http://127.0.0.1:9000/")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.api_key, "key");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.endpoint("quote"), "http://127.0.0.1:9000/quote");
    }
}
