//! Twelve Data API client

use crate::api::MarketDataSource;
use crate::config::TwelveDataConfig;
use crate::error::Result;
use crate::models::SymbolMatch;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

/// Twelve Data REST client
///
/// Every call is a single GET with the API key appended as `apikey`. HTTP
/// status codes are not inspected: Twelve Data reports most failures as a
/// JSON body with `status: "error"`, which callers see as a payload missing
/// the fields they need.
#[derive(Debug, Clone)]
pub struct TwelveDataClient {
    client: Client,
    config: TwelveDataConfig,
}

#[derive(Debug, Deserialize)]
struct SymbolSearchResponse {
    #[serde(default)]
    data: Vec<SymbolMatch>,
}

impl TwelveDataClient {
    /// Create a client from configuration
    pub fn new(config: TwelveDataConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &TwelveDataConfig {
        &self.config
    }

    async fn get_json(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value> {
        let response = self
            .client
            .get(self.config.endpoint(endpoint))
            .query(params)
            .query(&[("apikey", self.config.api_key.as_str())])
            .send()
            .await?;

        debug!(endpoint, status = %response.status(), "Twelve Data response");

        Ok(response.json().await?)
    }
}

#[async_trait]
impl MarketDataSource for TwelveDataClient {
    #[instrument(skip(self))]
    async fn symbol_search(&self, query: &str) -> Result<Vec<SymbolMatch>> {
        let data = self.get_json("symbol_search", &[("symbol", query)]).await?;
        let parsed: SymbolSearchResponse = serde_json::from_value(data)?;
        Ok(parsed.data)
    }

    #[instrument(skip(self))]
    async fn quote(&self, symbol: &str) -> Result<Value> {
        let data = self.get_json("quote", &[("symbol", symbol)]).await?;
        debug!(payload = %data, "quote payload");
        Ok(data)
    }

    #[instrument(skip(self))]
    async fn time_series(&self, symbol: &str, interval: &str, output_size: u32) -> Result<Value> {
        let output_size = output_size.to_string();
        self.get_json(
            "time_series",
            &[
                ("symbol", symbol),
                ("interval", interval),
                ("outputsize", output_size.as_str()),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = TwelveDataClient::new(TwelveDataConfig::new("test_key")).unwrap();
        assert_eq!(client.config().api_key, "test_key");
        assert_eq!(client.config().endpoint("quote"), "https://api.twelvedata.com/quote");
    }

    #[test]
    fn test_search_response_parsing() {
        let parsed: SymbolSearchResponse = serde_json::from_value(json!({
            "data": [
                {"symbol": "AAPL", "instrument_name": "Apple Inc", "exchange": "NASDAQ", "country": "United States"},
                {"symbol": "APC", "instrument_name": "Apple Inc", "exchange": "FSX", "country": "Germany"}
            ],
            "status": "ok"
        }))
        .unwrap();

        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[1].country.as_deref(), Some("Germany"));
    }

    #[test]
    fn test_search_error_payload_is_empty() {
        let parsed: SymbolSearchResponse = serde_json::from_value(json!({
            "code": 401,
            "message": "apikey parameter is incorrect",
            "status": "error"
        }))
        .unwrap();

        assert!(parsed.data.is_empty());
    }
}
