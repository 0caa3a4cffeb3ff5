//! Errors raised by LLM providers

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LLMError>;

#[derive(Error, Debug)]
pub enum LLMError {
    /// Non-success status not covered by a more specific variant
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid API key or authentication failed")]
    AuthenticationFailed,

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Transport failure: connect, timeout, or body read
    #[cfg(feature = "openai")]
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// 2xx response that could not be used
    #[error("Unexpected response format: {0}")]
    UnexpectedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            LLMError::AuthenticationFailed.to_string(),
            "Invalid API key or authentication failed"
        );
        assert_eq!(
            LLMError::ModelNotFound("gpt-9".to_string()).to_string(),
            "Model not found: gpt-9"
        );
    }
}
