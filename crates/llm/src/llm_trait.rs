use async_trait::async_trait;
use hottakes_common::Result;

/// Common trait for LLM clients
#[async_trait]
pub trait LlmClient: Send + Sync + std::fmt::Debug {
    /// Provider identifier this client talks to
    fn provider_id(&self) -> &str;

    /// Generate text from a prompt, awaited to completion
    async fn generate(&self, prompt: &str) -> Result<String>;
}
