use async_trait::async_trait;
use hottakes_common::{HotTakesError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::llm_trait::LlmClient;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
const API_VERSION: &str = "2023-06-01";
const DEFAULT_MODEL: &str = "claude-3-5-haiku-20241022";

// The Messages API requires max_tokens; the prompt asks for 3-5 short
// sentences, so this is plenty.
const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<MessageParam<'a>>,
}

#[derive(Debug, Serialize)]
struct MessageParam<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: String,
}

/// Anthropic Messages API client
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    base_url: String,
    model: String,
    api_key: String,
    client: Client,
}

impl AnthropicClient {
    /// Create new Anthropic client with the caller-supplied API key
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
impl LlmClient for AnthropicClient {
    fn provider_id(&self) -> &str {
        "anthropic"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/messages", self.base_url);

        debug!(
            "Sending messages request to Anthropic - Model: {}, Prompt length: {}",
            self.model,
            prompt.len()
        );

        let request = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: vec![MessageParam {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| HotTakesError::network(format!("Failed to reach Anthropic: {}", e)))?
            .error_for_status()
            .map_err(|e| HotTakesError::provider(format!("Anthropic API error: {}", e)))?;

        let result: MessagesResponse = response.json().await.map_err(|e| {
            HotTakesError::provider(format!("Failed to parse Anthropic response: {}", e))
        })?;

        let text = result
            .content
            .into_iter()
            .find(|block| block.block_type == "text")
            .map(|block| block.text)
            .unwrap_or_default();

        if text.is_empty() {
            return Err(HotTakesError::provider("Empty completion from Anthropic"));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_generate_reads_first_text_block() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/messages")
            .match_header("x-api-key", "sk-ant-test")
            .match_header("anthropic-version", API_VERSION)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"content":[{"type":"text","text":"1. Spicy"}]}"#)
            .create_async()
            .await;

        let client = AnthropicClient::with_base_url(server.url(), "sk-ant-test").unwrap();
        let text = client.generate("some prompt").await.unwrap();

        assert_eq!(text, "1. Spicy");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_surfaces_http_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/messages")
            .with_status(401)
            .with_body(r#"{"error":{"type":"authentication_error"}}"#)
            .create_async()
            .await;

        let client = AnthropicClient::with_base_url(server.url(), "bad-key").unwrap();
        let err = client.generate("some prompt").await.unwrap_err();

        assert!(matches!(err, HotTakesError::Provider(_)));
    }
}
