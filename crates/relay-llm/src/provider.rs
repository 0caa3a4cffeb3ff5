//! Provider seam

use crate::{CompletionRequest, CompletionResponse, Result};
use async_trait::async_trait;

/// A chat-completion backend
///
/// Implementations make exactly one upstream call per `complete` and never
/// retry.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Short identifier used in logs, e.g. `"openai"`
    fn name(&self) -> &str;
}
