use serde::{Deserialize, Serialize};

use crate::DEFAULT_PAGE_SIZE;

/// Backend base URL used when neither `config.toml` nor `API_BASE_URL` set one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Backend connection settings (`[api]` table).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

/// Logger settings (`[logging]` table).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Parse config text, falling back to defaults when it is malformed.
    ///
    /// Returns the parse error alongside the defaults so the caller can log it.
    pub fn parse(contents: &str) -> (Self, Option<String>) {
        match toml::from_str::<AppConfig>(contents) {
            Ok(config) => (config.normalized(), None),
            Err(e) => (AppConfig::default(), Some(e.to_string())),
        }
    }

    /// Replace the base URL when an override is present and non-empty.
    pub fn with_base_url_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api.base_url.trim().trim_end_matches('/').to_string();
        self.api.base_url = if trimmed.is_empty() {
            default_base_url()
        } else {
            trimmed
        };
        if self.api.page_size == 0 {
            self.api.page_size = DEFAULT_PAGE_SIZE;
        }
        self
    }
}
