//! Chat-completion client layer for stock-relay
//!
//! [`LLMProvider`] is the seam the commentary generator talks to. Requests and
//! responses are provider-neutral; the OpenAI-compatible implementation lives
//! in [`providers`] behind the default `openai` feature.

pub mod completion;
pub mod error;
pub mod messages;
pub mod provider;

#[cfg(feature = "openai")]
pub mod providers;

pub use completion::{CompletionRequest, CompletionResponse, StopReason, TokenUsage};
pub use error::{LLMError, Result};
pub use messages::{Message, Role};
pub use provider::LLMProvider;
