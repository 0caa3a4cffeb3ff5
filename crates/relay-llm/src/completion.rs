//! Chat-completion request and response shapes

use crate::Message;
use serde::{Deserialize, Serialize};

/// One chat-completion call
///
/// Built with chained `with_*` setters:
///
/// ```
/// use relay_llm::{CompletionRequest, Message};
///
/// let request = CompletionRequest::new("gpt-4o")
///     .with_system("Answer in one sentence.")
///     .with_message(Message::user("What does AAPL sell?"));
///
/// assert_eq!(request.messages.len(), 1);
/// ```
///
/// No token cap or sampling options are sent; the provider defaults apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,

    /// Sent ahead of `messages` as a system turn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    pub messages: Vec<Message>,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system: None,
            messages: Vec::new(),
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }
}

/// What the provider sent back
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub message: Message,
    pub stop_reason: StopReason,
    pub usage: TokenUsage,
}

/// Why generation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    /// Output withheld by the provider's content filter
    ContentFilter,
}

/// Token accounting reported by the provider; zero when it reports none
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: usize,
    pub output_tokens: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_chain() {
        let request = CompletionRequest::new("gpt-4o")
            .with_system("be terse")
            .with_message(Message::user("Hello"))
            .with_message(Message::assistant("Hi"));

        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.system.as_deref(), Some("be terse"));
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[1].text(), "Hi");
    }

    #[test]
    fn test_unset_system_is_not_serialized() {
        let request = CompletionRequest::new("gpt-4o").with_message(Message::user("Hello"));
        let json = serde_json::to_value(&request).unwrap();

        assert!(json.get("system").is_none());
        assert_eq!(json["messages"].as_array().map(Vec::len), Some(1));
    }
}
