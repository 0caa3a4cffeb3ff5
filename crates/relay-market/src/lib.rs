//! Stock lookup and commentary
//!
//! This crate holds everything the relay does between an incoming request and
//! the two external providers:
//!
//! - [`resolver`]: turns a free-text query ("Apple", "aapl") into a ticker
//! - [`fetcher`]: pulls the quote and the 30-day daily history for a ticker
//! - [`commentary`]: asks an LLM for a Markdown write-up of a stock
//! - [`prompts`]: the commentary prompt and localized fallback messages
//! - [`api`]: the market-data seam ([`MarketDataSource`]) and its Twelve Data client
//!
//! # Example
//!
//! ```rust,ignore
//! use relay_market::{StockFetcher, StockLookup, TwelveDataClient, TwelveDataConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> relay_market::Result<()> {
//!     let client = TwelveDataClient::new(TwelveDataConfig::new("your-api-key"))?;
//!     let fetcher = StockFetcher::new(Arc::new(client));
//!
//!     if let StockLookup::Found(snapshot) = fetcher.fetch("Apple").await? {
//!         println!("{} {}", snapshot.quote.symbol, snapshot.quote.price);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod commentary;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod prompts;
pub mod resolver;

// Re-export main types for convenience
pub use api::{MarketDataSource, TwelveDataClient};
pub use commentary::CommentaryGenerator;
pub use config::TwelveDataConfig;
pub use error::{MarketError, Result};
pub use fetcher::{StockFetcher, StockLookup};
pub use models::{AnalysisRequest, AnalysisResult, HistoryPoint, Quote, StockSnapshot, SymbolMatch};
pub use resolver::resolve_symbol;

// Re-export Language from relay-prompt
pub use relay_prompt::Language;
