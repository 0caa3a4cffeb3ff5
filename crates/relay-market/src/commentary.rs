//! LLM-written stock commentary

use crate::error::Result;
use crate::models::{AnalysisRequest, AnalysisResult};
use crate::prompts::{SYSTEM_INSTRUCTION, analysis_prompt, commentary_failed_message};
use relay_llm::{CompletionRequest, LLMProvider, Message};
use relay_prompt::{Language, LocalizedTemplate};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Generates Markdown commentary for a stock through an LLM provider
///
/// One request per call: the system instruction plus a user prompt rendered
/// from the caller's [`AnalysisRequest`]. No token budget is set.
pub struct CommentaryGenerator {
    provider: Arc<dyn LLMProvider>,
    model: String,
    language: Language,
    template: LocalizedTemplate,
}

impl CommentaryGenerator {
    /// Create a generator that writes prompts and failure notices in `language`
    pub fn new(
        provider: Arc<dyn LLMProvider>,
        model: impl Into<String>,
        language: Language,
    ) -> Result<Self> {
        Ok(Self {
            provider,
            model: model.into(),
            language,
            template: analysis_prompt()?,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Commentary for `request`
    ///
    /// Never fails: any provider or rendering error becomes a readable notice
    /// in the `analysis` field.
    #[instrument(skip(self, request), fields(symbol = %request.symbol))]
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        let analysis = match self.generate(request).await {
            Ok(text) => {
                info!(chars = text.len(), "commentary generated");
                text
            }
            Err(e) => {
                warn!(error = %e, "commentary failed");
                commentary_failed_message(self.language, &e.to_string())
            }
        };

        AnalysisResult { analysis }
    }

    async fn generate(&self, request: &AnalysisRequest) -> Result<String> {
        let prompt = self.template.render(self.language, request)?;

        let completion = CompletionRequest::new(&self.model)
            .with_system(SYSTEM_INSTRUCTION)
            .with_message(Message::user(prompt));

        let response = self.provider.complete(completion).await?;
        Ok(response.message.text().to_string())
    }
}

impl std::fmt::Debug for CommentaryGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommentaryGenerator")
            .field("provider", &self.provider.name())
            .field("model", &self.model)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}
