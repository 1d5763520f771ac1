use async_trait::async_trait;
use hottakes_common::{HotTakesError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::llm_trait::LlmClient;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Google Gemini generateContent client
#[derive(Debug, Clone)]
pub struct GoogleClient {
    base_url: String,
    model: String,
    api_key: String,
    client: Client,
}

impl GoogleClient {
    /// Create new Google client with the caller-supplied API key
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
impl LlmClient for GoogleClient {
    fn provider_id(&self) -> &str {
        "google"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        // Gemini authenticates through a key query parameter
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        debug!(
            "Sending generateContent request to Google - Model: {}, Prompt length: {}",
            self.model,
            prompt.len()
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| HotTakesError::network(format!("Failed to reach Google: {}", e)))?
            .error_for_status()
            .map_err(|e| HotTakesError::provider(format!("Google API error: {}", e)))?;

        let result: GenerateContentResponse = response.json().await.map_err(|e| {
            HotTakesError::provider(format!("Failed to parse Google response: {}", e))
        })?;

        let text = result
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(HotTakesError::provider("Empty completion from Google"));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_generate_concatenates_candidate_parts() {
        let mut server = mockito::Server::new_async().await;
        let path = format!("/models/{}:generateContent", DEFAULT_MODEL);
        let mock = server
            .mock("POST", path.as_str())
            .match_query(mockito::Matcher::UrlEncoded(
                "key".into(),
                "g-test".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"parts":[{"text":"1. Foo\n"},{"text":"2. Bar"}],"role":"model"}}]}"#,
            )
            .create_async()
            .await;

        let client = GoogleClient::with_base_url(server.url(), "g-test").unwrap();
        let text = client.generate("some prompt").await.unwrap();

        assert_eq!(text, "1. Foo\n2. Bar");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_rejects_missing_candidates() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock(
                "POST",
                mockito::Matcher::Regex(":generateContent".to_string()),
            )
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{}"#)
            .create_async()
            .await;

        let client = GoogleClient::with_base_url(server.url(), "g-test").unwrap();
        let err = client.generate("some prompt").await.unwrap_err();

        assert!(matches!(err, HotTakesError::Provider(_)));
    }
}
