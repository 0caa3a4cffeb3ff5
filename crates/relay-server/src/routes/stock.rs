//! Stock lookup endpoint

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use relay_market::StockLookup;
use relay_market::StockSnapshot;
use relay_market::prompts::{connection_failed_message, not_found_message};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/stock/{query}", get(get_stock))
}

/// Body of `GET /api/stock/{query}`: the snapshot, or `{error}` on any failure
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StockReply {
    Snapshot(StockSnapshot),
    Failure { error: String },
}

async fn get_stock(
    State(state): State<Arc<AppState>>,
    query: Result<Path<String>, PathRejection>,
) -> Json<StockReply> {
    // An undecodable segment (invalid UTF-8) names no stock
    let query = match query {
        Ok(Path(query)) => query,
        Err(rejection) => {
            warn!(error = %rejection, "undecodable stock query");
            return Json(StockReply::Failure {
                error: not_found_message(state.language).to_string(),
            });
        }
    };

    let reply = match state.fetcher.fetch(&query).await {
        Ok(StockLookup::Found(snapshot)) => StockReply::Snapshot(snapshot),
        Ok(StockLookup::NotFound { symbol }) => {
            warn!(%query, %symbol, "no price for symbol");
            StockReply::Failure {
                error: not_found_message(state.language).to_string(),
            }
        }
        Err(e) => {
            warn!(%query, error = %e, "stock lookup failed");
            StockReply::Failure {
                error: connection_failed_message(state.language).to_string(),
            }
        }
    };

    Json(reply)
}
