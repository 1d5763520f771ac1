use async_trait::async_trait;
use hottakes_common::{HotTakesError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::llm_trait::LlmClient;

/// Ollama generate request
#[derive(Debug, Serialize)]
struct OllamaGenerateRequest<'a> {
    /// Model name (e.g., "llama3.2")
    model: &'a str,

    /// Prompt text
    prompt: &'a str,

    /// Disable streaming; we await the full completion
    stream: bool,
}

/// Ollama generate response
#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    /// Generated text
    response: String,
}

/// Ollama API client (local provider, no credential)
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    model: String,
    client: Client,
}

impl OllamaClient {
    /// Create new Ollama client
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let model = model.into();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(300)) // 5 minutes for LLM calls
            .build()
            .map_err(|e| HotTakesError::network(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Ollama client initialized: {} ({})", base_url, model);
        Ok(Self {
            base_url,
            model,
            client,
        })
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    fn provider_id(&self) -> &str {
        "ollama"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);

        debug!(
            "Sending generate request to Ollama - Model: {}, Prompt length: {}",
            self.model,
            prompt.len()
        );

        let request = OllamaGenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| HotTakesError::network(format!("Failed to reach Ollama: {}", e)))?
            .error_for_status()
            .map_err(|e| HotTakesError::provider(format!("Ollama API error: {}", e)))?;

        let result: OllamaGenerateResponse = response
            .json()
            .await
            .map_err(|e| HotTakesError::provider(format!("Failed to parse Ollama response: {}", e)))?;

        if result.response.is_empty() {
            return Err(HotTakesError::provider("Empty response from Ollama"));
        }

        debug!("Received response from Ollama - Length: {}", result.response.len());
        Ok(result.response)
    }
}
