//! Startup configuration.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use asciigram_core::{ArrowStyle, BoxStyle};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "ASCIIGRAM_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Invalid config {path}: {message}")]
    Parse { path: String, message: String },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Application configuration.
///
/// Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial box styles, the first one current.
    pub box_styles: Vec<BoxStyle>,
    /// Initial arrow styles, the first one current.
    pub arrow_styles: Vec<ArrowStyle>,
    /// Where log output goes instead of stderr.
    pub log_file: Option<PathBuf>,
    /// Copy exported regions to the system clipboard. When false, copies are
    /// only kept in memory.
    pub system_clipboard: bool,
    /// Show the status bar on the top row.
    pub status_bar: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            box_styles: vec![BoxStyle::default()],
            arrow_styles: vec![ArrowStyle::default()],
            log_file: None,
            system_clipboard: true,
            status_bar: true,
        }
    }
}

impl AppConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConfigError::NotFound(path.display().to_string()),
            _ => ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)),
        })?;
        let config = Self::from_json(&json).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Pick the config source: an explicit path wins over the environment
    /// variable, and with neither the defaults are used.
    pub fn resolve(explicit: Option<&Path>, env: Option<OsString>) -> ConfigResult<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match env.filter(|value| !value.is_empty()) {
                Some(value) => Self::load(Path::new(&value)),
                None => Ok(Self::default()),
            },
        }
    }
}
