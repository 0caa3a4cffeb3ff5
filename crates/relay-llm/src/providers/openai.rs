//! OpenAI chat-completions provider
//!
//! Speaks the `POST {api_base}/chat/completions` protocol with bearer
//! authentication, so any compatible server (vLLM, LM Studio, a proxy) works
//! by changing `api_base`.
//!
//! ```no_run
//! use relay_llm::providers::{OpenAIConfig, OpenAIProvider};
//! use relay_llm::{CompletionRequest, LLMProvider, Message};
//!
//! # async fn run() -> relay_llm::Result<()> {
//! let config = OpenAIConfig::new("sk-...").with_api_base("http://localhost:8000/v1");
//! let provider = OpenAIProvider::with_config(config)?;
//!
//! let request = CompletionRequest::new("gpt-4o").with_message(Message::user("Hello!"));
//! let response = provider.complete(request).await?;
//! println!("{}", response.message.text());
//! # Ok(())
//! # }
//! ```

use crate::{
    CompletionRequest, CompletionResponse, LLMError, LLMProvider, Message, Result, Role,
    StopReason, TokenUsage,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Default OpenAI REST endpoint
pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Connection settings for an OpenAI-compatible endpoint
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// Sent as a bearer token
    pub api_key: String,

    /// Everything before `/chat/completions`, e.g. `http://localhost:8000/v1`
    pub api_base: String,

    /// Per-request timeout; `None` keeps the transport default
    pub timeout_secs: Option<u64>,
}

impl OpenAIConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: DEFAULT_OPENAI_API_BASE.to_string(),
            timeout_secs: None,
        }
    }
}

/// [`LLMProvider`] backed by `{api_base}/chat/completions`
pub struct OpenAIProvider {
    client: Client,
    config: OpenAIConfig,
}

impl OpenAIProvider {
    pub fn with_config(config: OpenAIConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// Provider for the public OpenAI endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(OpenAIConfig::new(api_key))
    }

    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    #[instrument(skip(self, request), fields(model = %request.model, api_base = %self.config.api_base))]
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        debug!(messages = request.messages.len(), "sending chat completion");

        let body = ChatRequest {
            model: request.model.clone(),
            messages: chat_messages(request.system, request.messages),
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            warn!(%status, "chat completion rejected");
            return Err(status_error(status.as_u16(), body, request.model));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| LLMError::UnexpectedResponse(format!("undecodable completion: {e}")))?;

        // Only the first choice is ever used
        let Some(choice) = parsed.choices.into_iter().next() else {
            return Err(LLMError::UnexpectedResponse("no choices in completion".to_string()));
        };

        let usage = parsed.usage.map_or_else(TokenUsage::default, |u| TokenUsage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
        });
        debug!(
            finish_reason = ?choice.finish_reason,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "chat completion received"
        );

        Ok(CompletionResponse {
            message: Message::assistant(choice.message.content.unwrap_or_default()),
            stop_reason: map_stop_reason(choice.finish_reason.as_deref()),
            usage,
        })
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

// Wire format of /chat/completions

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
    #[serde(default)]
    finish_reason: Option<String>,
}

/// `content` is null for refusals and tool calls
#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: usize,
    completion_tokens: usize,
}

/// System prompt first, then the conversation in order
fn chat_messages(system: Option<String>, messages: Vec<Message>) -> Vec<ChatMessage> {
    let system = system.map(|content| ChatMessage {
        role: Role::System.as_str(),
        content,
    });

    system
        .into_iter()
        .chain(messages.into_iter().map(|m| ChatMessage {
            role: m.role.as_str(),
            content: m.content,
        }))
        .collect()
}

fn status_error(status: u16, body: String, model: String) -> LLMError {
    match status {
        400 => LLMError::InvalidRequest(body),
        401 | 403 => LLMError::AuthenticationFailed,
        404 => LLMError::ModelNotFound(model),
        429 => LLMError::RateLimitExceeded(body),
        _ => LLMError::RequestFailed(format!("HTTP {status}: {body}")),
    }
}

fn map_stop_reason(reason: Option<&str>) -> StopReason {
    match reason {
        Some("length") => StopReason::MaxTokens,
        Some("content_filter") => StopReason::ContentFilter,
        Some("stop") | None => StopReason::EndTurn,
        Some(other) => {
            debug!(finish_reason = other, "unrecognised finish reason");
            StopReason::EndTurn
        }
    }
}
