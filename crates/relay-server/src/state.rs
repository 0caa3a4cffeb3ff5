//! Shared handler state

use crate::config::RelayConfig;
use crate::error::StartupError;
use relay_llm::providers::OpenAIProvider;
use relay_market::{CommentaryGenerator, Language, StockFetcher, TwelveDataClient};
use std::sync::Arc;

/// Shared application state, passed to all route handlers via `axum::extract::State`.
///
/// Built once at startup and read-only afterwards.
pub struct AppState {
    pub fetcher: StockFetcher,
    pub commentary: CommentaryGenerator,
    pub language: Language,
}

impl AppState {
    pub fn new(fetcher: StockFetcher, commentary: CommentaryGenerator) -> Arc<Self> {
        let language = commentary.language();
        Arc::new(Self {
            fetcher,
            commentary,
            language,
        })
    }

    /// Wire the Twelve Data client and the OpenAI provider from configuration
    pub fn from_config(config: &RelayConfig) -> Result<Arc<Self>, StartupError> {
        let market = TwelveDataClient::new(config.twelve_data.clone())?;
        let llm = OpenAIProvider::with_config(config.openai.clone())?;

        let fetcher = StockFetcher::new(Arc::new(market));
        let commentary = CommentaryGenerator::new(Arc::new(llm), &config.model, config.language)?;

        Ok(Self::new(fetcher, commentary))
    }
}
