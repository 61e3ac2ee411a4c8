//! TOML-based application configuration.
//!
//! Stores:
//! - The data directory the CLI reads telemetry bundles from
//! - Defaults for synthetic data generation
//!
//! Scoring weights, deep work cutoffs, and the recommendation cap are fixed
//! constants of the engine, not configuration.
//!
//! Configuration is stored at `~/.config/focuspulse/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::synth::SynthConfig;

/// Input data location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the CSV/ICS telemetry bundle
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/focuspulse/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub synth: SynthConfig,
}

/// Returns `~/.config/focuspulse[-dev]/` based on FOCUSPULSE_ENV.
///
/// Set FOCUSPULSE_ENV=dev to use a separate development directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn config_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSPULSE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focuspulse-dev")
    } else {
        base_dir.join("focuspulse")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

impl Config {
    /// Location of the config file.
    ///
    /// # Errors
    /// Returns an error if the configuration directory cannot be resolved.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = config_dir().map_err(|e| ConfigError::DirUnavailable(e.to_string()))?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing the default file on first use.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}
