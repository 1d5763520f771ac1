use hottakes_common::HotTakesError;
use std::fmt;
use std::str::FromStr;

/// Statically known text-generation providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderId {
    OpenAi,
    Anthropic,
    Google,
    Ollama,
}

impl ProviderId {
    /// All supported providers, in UI order
    pub const ALL: [ProviderId; 4] = [
        ProviderId::OpenAi,
        ProviderId::Anthropic,
        ProviderId::Google,
        ProviderId::Ollama,
    ];

    /// Wire identifier used by the browser form
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenAi => "openai",
            ProviderId::Anthropic => "anthropic",
            ProviderId::Google => "google",
            ProviderId::Ollama => "ollama",
        }
    }

    /// Whether this provider needs a caller-supplied API key.
    /// Ollama runs locally and takes none.
    pub fn requires_api_key(&self) -> bool {
        !matches!(self, ProviderId::Ollama)
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = HotTakesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(ProviderId::OpenAi),
            "anthropic" => Ok(ProviderId::Anthropic),
            "google" => Ok(ProviderId::Google),
            "ollama" => Ok(ProviderId::Ollama),
            other => Err(HotTakesError::invalid_input(format!(
                "Unsupported provider '{}'",
                other
            ))),
        }
    }
}
