//! HTTP surface of stock-relay
//!
//! Two JSON endpoints sit in front of the market-data and LLM providers:
//!
//! - `GET /api/stock/{query}`: quote plus 30-day history, or `{error}`
//! - `POST /api/analyze`: `{analysis}` commentary for a stock
//!
//! plus a `GET /api/health` probe. Any origin may call them, with credentials.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::{Args, ConfigError, RelayConfig};
pub use error::{ApiError, StartupError};
pub use state::AppState;

/// Full application router with CORS and request tracing
pub fn app(state: Arc<AppState>) -> Router {
    routes::api_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}
