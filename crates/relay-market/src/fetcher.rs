//! Quote and daily history retrieval

use crate::api::MarketDataSource;
use crate::error::{MarketError, Result};
use crate::models::{HistoryPoint, Quote, StockSnapshot, coerce_f64};
use crate::resolver::resolve_symbol;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Bar size requested from the time-series endpoint
pub const HISTORY_INTERVAL: &str = "1day";

/// Number of daily closes requested and returned
pub const HISTORY_POINTS: u32 = 30;

/// Outcome of a lookup that reached the provider
#[derive(Debug, Clone, PartialEq)]
pub enum StockLookup {
    /// Quote and history for the resolved symbol
    Found(StockSnapshot),
    /// The provider had no price for the resolved symbol
    NotFound { symbol: String },
}

/// Resolves a query and fetches its quote and history
///
/// Transport failures and malformed payloads come back as `Err`; a quote
/// without a `close` price is the only condition reported as
/// [`StockLookup::NotFound`].
#[derive(Clone)]
pub struct StockFetcher {
    source: Arc<dyn MarketDataSource>,
}

impl StockFetcher {
    pub fn new(source: Arc<dyn MarketDataSource>) -> Self {
        Self { source }
    }

    pub async fn fetch(&self, query: &str) -> Result<StockLookup> {
        let symbol = resolve_symbol(self.source.as_ref(), query).await;
        info!(query, %symbol, "resolved query");

        let quote = self.source.quote(&symbol).await?;
        let series = self
            .source
            .time_series(&symbol, HISTORY_INTERVAL, HISTORY_POINTS)
            .await?;

        if quote.get("close").is_none() {
            debug!(%symbol, "quote has no close price");
            return Ok(StockLookup::NotFound { symbol });
        }

        Ok(StockLookup::Found(StockSnapshot {
            quote: parse_quote(&quote, &symbol)?,
            history: parse_history(&series)?,
        }))
    }
}

fn parse_quote(payload: &Value, resolved: &str) -> Result<Quote> {
    let symbol = payload
        .get("symbol")
        .and_then(Value::as_str)
        .ok_or_else(|| MarketError::malformed("quote", "missing `symbol`"))?;
    let name = payload
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(resolved);

    Ok(Quote {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price: number_field(payload, "close", "quote")?,
        change: number_field(payload, "change", "quote")?,
        percent_change: number_field(payload, "percent_change", "quote")?,
    })
}

/// Oldest-first closes; a payload without `values` is an empty history
fn parse_history(payload: &Value) -> Result<Vec<HistoryPoint>> {
    let Some(values) = payload.get("values") else {
        return Ok(Vec::new());
    };
    let bars = values
        .as_array()
        .ok_or_else(|| MarketError::malformed("time series", "`values` is not a list"))?;

    // Provider order is newest first; keep the newest bars, then flip.
    bars.iter()
        .take(HISTORY_POINTS as usize)
        .rev()
        .map(|bar| {
            let date = bar
                .get("datetime")
                .and_then(Value::as_str)
                .ok_or_else(|| MarketError::malformed("time series", "bar without `datetime`"))?;
            Ok(HistoryPoint {
                date: date.to_string(),
                price: number_field(bar, "close", "time series")?,
            })
        })
        .collect()
}

fn number_field(payload: &Value, key: &str, what: &'static str) -> Result<f64> {
    let raw = payload
        .get(key)
        .ok_or_else(|| MarketError::malformed(what, format!("missing `{key}`")))?;

    coerce_f64(raw)
        .filter(|n| n.is_finite())
        .ok_or_else(|| MarketError::malformed(what, format!("`{key}` is not a finite number: {raw}")))
}
