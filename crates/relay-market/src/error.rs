//! Error types for market-data and commentary operations

use thiserror::Error;

/// Errors raised while talking to the market-data or LLM providers
#[derive(Debug, Error)]
pub enum MarketError {
    /// Network or HTTP error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Provider answered, but not in the expected shape
    #[error("Malformed {what} payload: {reason}")]
    MalformedPayload {
        what: &'static str,
        reason: String,
    },

    /// Completion request failed
    #[error(transparent)]
    Llm(#[from] relay_llm::LLMError),

    /// Prompt could not be rendered
    #[error(transparent)]
    Prompt(#[from] relay_prompt::PromptError),
}

impl MarketError {
    pub(crate) fn malformed(what: &'static str, reason: impl Into<String>) -> Self {
        MarketError::MalformedPayload {
            what,
            reason: reason.into(),
        }
    }
}

/// Result type alias for market operations
pub type Result<T> = std::result::Result<T, MarketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MarketError::malformed("quote", "missing field `change`");
        assert_eq!(err.to_string(), "Malformed quote payload: missing field `change`");

        let err = MarketError::from(relay_llm::LLMError::AuthenticationFailed);
        assert_eq!(err.to_string(), "Invalid API key or authentication failed");
    }
}
