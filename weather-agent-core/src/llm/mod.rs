//! Language-model integration
//!
//! A single stateless call: prompt in, free text out. No history is kept
//! between calls.

pub mod ollama;
pub mod prompts;

pub use ollama::OllamaClient;
pub use prompts::PromptTemplates;

use crate::errors::UpstreamResult;
use async_trait::async_trait;

/// Trait for text-generation backends
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Model identifier sent with each request
    fn model(&self) -> &str;

    /// Generate a completion for `prompt`
    async fn generate(&self, prompt: &str) -> UpstreamResult<String>;
}
