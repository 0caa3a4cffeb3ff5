//! Error types for the HTTP layer and service startup

use crate::config::ConfigError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use relay_llm::LLMError;
use relay_market::MarketError;
use serde_json::json;
use thiserror::Error;

/// Request errors that are answered with a non-200 status
///
/// Upstream failures never end up here: they are folded into the normal
/// response bodies.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidBody(rejection) => {
                (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Failures while assembling the service
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Market data client: {0}")]
    Market(#[from] MarketError),

    #[error("LLM provider: {0}")]
    Llm(#[from] LLMError),
}
