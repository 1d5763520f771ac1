//! Hot Takes LLM integration
//!
//! Provider clients, dispatch and hot-take extraction

mod anthropic;
mod dispatch;
mod extractor;
mod google;
mod llm_trait;
mod ollama;
mod openai;
mod prompts;
mod types;

pub use anthropic::AnthropicClient;
pub use dispatch::build_client;
pub use extractor::extract_hot_takes;
pub use google::GoogleClient;
pub use llm_trait::LlmClient;
pub use ollama::OllamaClient;
pub use openai::OpenAiClient;
pub use prompts::hot_take_prompt;
pub use types::ProviderId;
