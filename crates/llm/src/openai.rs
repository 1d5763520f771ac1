use async_trait::async_trait;
use hottakes_common::{HotTakesError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::llm_trait::LlmClient;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// The model the original deployment prompted
const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// OpenAI chat completions client
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: Client,
}

impl OpenAiClient {
    /// Create new OpenAI client with the caller-supplied API key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a client against a custom endpoint (used in tests)
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(300))
            .build()
            .map_err(|e| HotTakesError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            client,
        })
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    fn provider_id(&self) -> &str {
        "openai"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!(
            "Sending chat completion request to OpenAI - Model: {}, Prompt length: {}",
            self.model,
            prompt.len()
        );

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| HotTakesError::network(format!("Failed to reach OpenAI: {}", e)))?
            .error_for_status()
            .map_err(|e| HotTakesError::provider(format!("OpenAI API error: {}", e)))?;

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| HotTakesError::provider(format!("Failed to parse OpenAI response: {}", e)))?;

        let text = result
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if text.is_empty() {
            return Err(HotTakesError::provider("Empty completion from OpenAI"));
        }

        Ok(text)
    }
}
