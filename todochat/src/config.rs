//! Environment configuration.

/// Default backend base URL when `TODOCHAT_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Runtime configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the AI Todo Assistant backend.
    pub api_url: String,
}

impl Config {
    /// Resolve configuration from the environment.
    pub fn from_env() -> Self {
        let api_url = std::env::var("TODOCHAT_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Apply a command-line override on top of the environment.
    pub fn with_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url.trim_end_matches('/').to_string();
        }
        self
    }
}
