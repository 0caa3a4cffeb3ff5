//! Concrete LLM provider implementations

pub mod openai;

pub use openai::{DEFAULT_OPENAI_API_BASE, OpenAIConfig, OpenAIProvider};
