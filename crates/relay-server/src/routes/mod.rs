//! HTTP routes under `/api`

pub mod analyze;
pub mod stock;
pub mod system;

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// Assemble the API router.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(stock::routes())
        .merge(analyze::routes())
        .merge(system::routes())
}
