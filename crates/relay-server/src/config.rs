//! Startup configuration
//!
//! Every setting is a CLI flag with an environment fallback. Provider keys may
//! be left empty; base URLs and the bind address must parse.

use clap::Parser;
use relay_llm::providers::{DEFAULT_OPENAI_API_BASE, OpenAIConfig};
use relay_market::config::DEFAULT_TWELVE_DATA_API_BASE;
use relay_market::{Language, TwelveDataConfig};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;
use url::Url;

/// Model used for commentary unless overridden
pub const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Parser, Debug, Clone)]
#[command(name = "stock-relay")]
#[command(version, about = "Stock quote relay with AI commentary", long_about = None)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "RELAY_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on
    #[arg(long, env = "RELAY_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Language of prompts and error messages (en, zh)
    #[arg(long, env = "RELAY_LANGUAGE", default_value = "en")]
    pub language: Language,

    /// Twelve Data API key
    #[arg(long, env = "TWELVE_DATA_KEY", default_value = "", hide_env_values = true)]
    pub twelve_data_key: String,

    /// Twelve Data base URL
    #[arg(long, env = "TWELVE_DATA_API_BASE", default_value = DEFAULT_TWELVE_DATA_API_BASE)]
    pub twelve_data_api_base: String,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    pub openai_api_key: String,

    /// OpenAI-compatible base URL
    #[arg(long, env = "OPENAI_API_BASE", default_value = DEFAULT_OPENAI_API_BASE)]
    pub openai_api_base: String,

    /// Chat model used for commentary
    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    pub openai_model: String,

    /// Timeout in seconds for each upstream request; transport default when unset
    #[arg(long, env = "RELAY_UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("Invalid {name} '{value}': {source}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported scheme for {name} '{value}': expected http or https")]
    UnsupportedScheme { name: &'static str, value: String },
}

/// Validated settings the service is built from
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub listen_addr: SocketAddr,
    pub language: Language,
    pub twelve_data: TwelveDataConfig,
    pub openai: OpenAIConfig,
    pub model: String,
}

impl RelayConfig {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let ip: IpAddr = args
            .bind
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(args.bind.clone()))?;

        validate_base("TWELVE_DATA_API_BASE", &args.twelve_data_api_base)?;
        validate_base("OPENAI_API_BASE", &args.openai_api_base)?;

        if args.twelve_data_key.trim().is_empty() {
            warn!("TWELVE_DATA_KEY is not set; stock lookups will fail upstream");
        }
        if args.openai_api_key.trim().is_empty() {
            warn!("OPENAI_API_KEY is not set; commentary will fail upstream");
        }

        let mut twelve_data = TwelveDataConfig::new(args.twelve_data_key.trim())
            .with_api_base(args.twelve_data_api_base);
        let mut openai =
            OpenAIConfig::new(args.openai_api_key.trim()).with_api_base(args.openai_api_base);

        if let Some(secs) = args.upstream_timeout_secs {
            twelve_data = twelve_data.with_timeout(Duration::from_secs(secs));
            openai = openai.with_timeout(secs);
        }

        Ok(Self {
            listen_addr: SocketAddr::new(ip, args.port),
            language: args.language,
            twelve_data,
            openai,
            model: args.openai_model,
        })
    }
}

fn validate_base(name: &'static str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        name,
        value: value.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ConfigError::UnsupportedScheme {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let argv = std::iter::once("stock-relay").chain(extra.iter().copied());
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_explicit_flags() {
        let args = parse(&[
            "--bind",
            "127.0.0.1",
            "--port",
            "9100",
            "--language",
            "zh",
            "--twelve-data-key",
            "td",
            "--twelve-data-api-base",
            "http://localhost:4000",
            "--openai-api-key",
            "sk",
            "--openai-api-base",
            "http://localhost:1234/v1",
            "--openai-model",
            "local-model",
            "--upstream-timeout-secs",
            "15",
        ]);
        let config = RelayConfig::from_args(args).unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9100".parse::<SocketAddr>().unwrap());
        assert_eq!(config.language, Language::Chinese);
        assert_eq!(config.twelve_data.api_key, "td");
        assert_eq!(config.twelve_data.api_base, "http://localhost:4000");
        assert_eq!(config.twelve_data.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.openai.api_key, "sk");
        assert_eq!(config.openai.timeout_secs, Some(15));
        assert_eq!(config.model, "local-model");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let args = parse(&["--openai-api-base", "not a url"]);
        let err = RelayConfig::from_args(args).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { name: "OPENAI_API_BASE", .. }));

        let args = parse(&["--twelve-data-api-base", "ftp://example.com"]);
        let err = RelayConfig::from_args(args).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme { .. }));
    }

    #[test]
    fn test_invalid_bind_address_is_rejected() {
        let args = parse(&["--bind", "localhost:80"]);
        assert!(matches!(
            RelayConfig::from_args(args),
            Err(ConfigError::InvalidBindAddress(_))
        ));
    }

    #[test]
    fn test_unknown_language_is_a_parse_error() {
        let argv = ["stock-relay", "--language", "fr"];
        assert!(Args::try_parse_from(argv).is_err());
    }
}
