use serde::{Deserialize, Serialize};

use crate::flights::fetcher::{DEFAULT_LIMIT, FLIGHTS_API_URL};

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "AVIATIONSTACK_ACCESS_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// AviationStack access key. Leave empty in the file and set
    /// `AVIATIONSTACK_ACCESS_KEY` instead for production use.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_limit")]
    pub limit: u32,

    #[serde(default)]
    pub offset: u32,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

fn default_endpoint() -> String {
    FLIGHTS_API_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            limit: default_limit(),
            offset: 0,
            endpoint: default_endpoint(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file is
    /// absent, then apply the `AVIATIONSTACK_ACCESS_KEY` override.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let mut config = if std::path::Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                config.api_key = key;
            }
        }

        Ok(config)
    }
}
