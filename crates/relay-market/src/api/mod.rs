//! Market-data provider seam

pub mod twelve_data;

pub use twelve_data::TwelveDataClient;

use crate::error::Result;
use crate::models::SymbolMatch;
use async_trait::async_trait;
use serde_json::Value;

/// Source of symbol search results, quotes and daily time series
///
/// Quote and time-series payloads are handed back as raw JSON; shaping them
/// (and deciding what counts as "not found") is the fetcher's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Candidates for a free-text query, in provider order
    async fn symbol_search(&self, query: &str) -> Result<Vec<SymbolMatch>>;

    /// Latest quote payload for a symbol
    async fn quote(&self, symbol: &str) -> Result<Value>;

    /// Time-series payload, newest bar first
    async fn time_series(&self, symbol: &str, interval: &str, output_size: u32) -> Result<Value>;
}
