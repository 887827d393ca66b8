//! Configuration management
//!
//! Reads `~/.google-objects/config.json`. Every field is optional; a missing
//! file yields the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::common::http::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use crate::common::{config_path, GoogleError, GoogleResult};
use crate::sheets::SHEETS_API_BASE;
use crate::slides::SLIDES_API_BASE;

/// Environment variable overriding the credentials file location
pub const CREDENTIALS_ENV: &str = "GOOGLE_OBJECTS_CREDENTIALS";

fn default_sheets_base_url() -> String {
    SHEETS_API_BASE.to_string()
}

fn default_slides_base_url() -> String {
    SLIDES_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<PathBuf>,
    #[serde(default = "default_sheets_base_url")]
    pub sheets_base_url: String,
    #[serde(default = "default_slides_base_url")]
    pub slides_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials: None,
            sheets_base_url: default_sheets_base_url(),
            slides_base_url: default_slides_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Config {
    /// Load the user config, then apply environment overrides
    pub fn load() -> GoogleResult<Self> {
        let path = config_path()?;
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            debug!("No config at {:?}, using defaults", path);
            Self::default()
        };

        config.apply_credentials_override(std::env::var(CREDENTIALS_ENV).ok());
        Ok(config)
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> GoogleResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GoogleError::config(format!("Failed to read config {:?}: {}", path, e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            GoogleError::config(format!("Failed to parse config {:?}: {}", path, e))
        })
    }

    /// Replace the credentials path when an override is set and non-empty
    pub fn apply_credentials_override(&mut self, value: Option<String>) {
        if let Some(path) = value.filter(|v| !v.trim().is_empty()) {
            self.credentials = Some(PathBuf::from(path.trim()));
        }
    }
}
