use eatclub_api::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration read from disk. Nothing is written back: sort order and
/// search text live only for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Fallback tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// How long a snackbar stays on screen
    #[serde(default = "default_snackbar_duration")]
    pub snackbar_duration_ms: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    15
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_snackbar_duration() -> u64 {
    4000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout(),
            log_level: default_log_level(),
            snackbar_duration_ms: default_snackbar_duration(),
        }
    }
}

impl Config {
    /// Get the config file path (~/.config/eatclub/config.json)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("eatclub").join("config.json"))
    }

    /// Load config from disk, or return default if not found
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::from_json(&content),
            Err(_) => Self::default(),
        }
    }

    fn from_json(content: &str) -> Self {
        serde_json::from_str(content).unwrap_or_default()
    }

    /// Base URL of the API
    /// Priority: 1. EATCLUB_API_URL env var, 2. config file
    pub fn api_base_url(&self) -> String {
        Self::resolve_base_url(std::env::var("EATCLUB_API_URL").ok(), &self.api_base_url)
    }

    fn resolve_base_url(env_value: Option<String>, configured: &str) -> String {
        env_value
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| configured.to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn snackbar_duration(&self) -> Duration {
        Duration::from_millis(self.snackbar_duration_ms)
    }
}
