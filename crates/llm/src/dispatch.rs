use hottakes_common::{AppConfig, HotTakesError, Result};
use tracing::debug;

use crate::anthropic::AnthropicClient;
use crate::google::GoogleClient;
use crate::llm_trait::LlmClient;
use crate::ollama::OllamaClient;
use crate::openai::OpenAiClient;
use crate::types::ProviderId;

/// Construct the client for the selected provider.
///
/// A fresh handle is built per call from the caller-supplied credential;
/// nothing is shared across requests. Hosted providers fail with an
/// invalid-input error when no key is supplied, before any outbound call
/// is made.
pub fn build_client(
    provider: ProviderId,
    api_key: Option<&str>,
    config: &AppConfig,
) -> Result<Box<dyn LlmClient>> {
    let api_key = api_key.map(str::trim).filter(|key| !key.is_empty());

    if provider.requires_api_key() && api_key.is_none() {
        return Err(HotTakesError::invalid_input(format!(
            "API key is required for provider '{}'",
            provider
        )));
    }

    debug!("Building LLM client for provider '{}'", provider);

    let client: Box<dyn LlmClient> = match provider {
        ProviderId::OpenAi => Box::new(OpenAiClient::new(api_key.unwrap_or_default())?),
        ProviderId::Anthropic => Box::new(AnthropicClient::new(api_key.unwrap_or_default())?),
        ProviderId::Google => Box::new(GoogleClient::new(api_key.unwrap_or_default())?),
        ProviderId::Ollama => Box::new(OllamaClient::new(
            config.ollama_base_url.clone(),
            config.ollama_model.clone(),
        )?),
    };

    Ok(client)
}
