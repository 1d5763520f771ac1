use serde::{Deserialize, Serialize};

/// Body of POST /api/generate-hot-takes
///
/// Every field is optional at the wire level so that a missing field
/// produces our own 400 JSON error instead of the framework's default
/// body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateHotTakesRequest {
    /// Provider identifier: "openai", "anthropic", "google" or "ollama"
    pub provider: Option<String>,

    /// API key; required unless the provider is ollama
    pub api_key: Option<String>,

    /// Freeform text to turn into hot takes
    pub thoughts: Option<String>,
}

/// Success body
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotTakesResponse {
    pub hot_takes: Vec<String>,
}

/// Error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
