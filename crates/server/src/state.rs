use hottakes_common::AppConfig;

/// Shared application state
///
/// Only configuration lives here; provider handles are built per request
/// from the caller-supplied credential.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}
