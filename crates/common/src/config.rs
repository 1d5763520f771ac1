use crate::error::HotTakesError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Hot Takes application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Ollama API base URL (the only provider configured server-side;
    /// hosted providers take their credential from each request)
    pub ollama_base_url: String,

    /// Ollama model name
    pub ollama_model: String,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Static frontend assets directory
    pub static_dir: PathBuf,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ollama_base_url: "http://localhost:11434".to_string(),
            ollama_model: "llama3.2:latest".to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            static_dir: PathBuf::from("./static"),
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, HotTakesError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            ollama_base_url: std::env::var("OLLAMA_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: std::env::var("OLLAMA_MODEL")
                .unwrap_or_else(|_| "llama3.2:latest".to_string()),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            static_dir: Self::get_env_path("STATIC_DIR")
                .unwrap_or_else(|| PathBuf::from("./static")),
            log_dir: Self::get_env_path("LOG_DIR")
                .unwrap_or_else(|| PathBuf::from("./log")),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
        };

        config.validate()?;

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), HotTakesError> {
        if !self.ollama_base_url.starts_with("http://")
            && !self.ollama_base_url.starts_with("https://") {
            return Err(HotTakesError::config(
                "Ollama base URL must start with http:// or https://"
            ));
        }

        if self.ollama_model.is_empty() {
            return Err(HotTakesError::config("Ollama model name cannot be empty"));
        }

        if self.server_port == 0 {
            return Err(HotTakesError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
