//! Configuration for the trunkline shell
//!
//! Read from TOML. Every field has a default, so a partial file (or none at
//! all) is fine:
//!
//! ```toml
//! strict = false
//! prompt = "Enter command: "
//! initial_network = "network.txt"
//!
//! [logging]
//! level = "warn"
//! json = false
//! file_info = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_PROMPT: &str = "Enter command: ";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("failed to install logger: {0}")]
    Logging(String),
}

/// Main configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrunklineConfig {
    /// Report malformed commands and lookup misses instead of ignoring them
    pub strict: bool,
    /// Printed before each command. Empty disables it.
    pub prompt: String,
    /// Network file loaded before the first prompt
    pub initial_network: Option<PathBuf>,
    pub logging: LogSettings,
}

/// Logging section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
    pub file_info: bool,
}

impl Default for TrunklineConfig {
    fn default() -> Self {
        Self {
            strict: false,
            prompt: DEFAULT_PROMPT.to_string(),
            initial_network: None,
            logging: LogSettings::default(),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
            file_info: false,
        }
    }
}

impl TrunklineConfig {
    /// `$XDG_CONFIG_HOME/trunkline/config.toml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trunkline").join("config.toml"))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `explicit` if given, else from [`default_path`](Self::default_path)
    /// if that file exists, else defaults.
    ///
    /// A missing explicit file is an error. A missing default file is not.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn prompt(&self) -> Option<&str> {
        if self.prompt.is_empty() {
            None
        } else {
            Some(&self.prompt)
        }
    }
}
