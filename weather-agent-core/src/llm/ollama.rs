//! Ollama client for single-shot, non-streaming generation

use super::LanguageModel;
use crate::config::AgentConfig;
use crate::errors::{UpstreamFailure, UpstreamResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, trace};

/// Ollama `/api/generate` client
pub struct OllamaClient {
    client: reqwest::Client,
    host: String,
    model: String,
    timeout: Duration,
}

impl OllamaClient {
    /// Create a new Ollama client
    pub fn new(
        host: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> UpstreamResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamFailure::network(e.to_string()))?;

        Ok(Self {
            client,
            host: host.into().trim_end_matches('/').to_string(),
            model: model.into(),
            timeout,
        })
    }

    /// Create a client from the startup configuration
    pub fn from_config(config: &AgentConfig) -> UpstreamResult<Self> {
        Self::new(config.model_host(), config.model.clone(), config.model_timeout())
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

#[async_trait]
impl LanguageModel for OllamaClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> UpstreamResult<String> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        debug!("POST {}/api/generate (model={}, timeout={:?})", self.host, self.model, self.timeout);
        trace!("Prompt:\n{}", prompt);

        let response = self
            .client
            .post(format!("{}/api/generate", self.host))
            .json(&request)
            .send()
            .await
            .map_err(|e| UpstreamFailure::from_reqwest(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamFailure::status(status.as_u16(), body));
        }

        let result: GenerateResponse = response
            .json()
            .await
            .map_err(|e| UpstreamFailure::from_reqwest(e, self.timeout))?;

        debug!("Received {} bytes from {}", result.response.len(), self.model);
        Ok(result.response)
    }
}

/// Ollama API request structure
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Ollama API response structure
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}
