//! TOML-based appearance configuration.
//!
//! Stores presentation preferences only:
//! - Accent color (ring, numeral, play control)
//! - Alert color (finished ring, restart control)
//!
//! The countdown duration is a compile-time constant and never appears
//! here. Configuration is stored at `~/.config/ringdown/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, CoreError};

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color for the ring, numeral and play control, e.g. `"#02e4e9"`.
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
    /// Hex color for the finished ring and restart control.
    #[serde(default = "default_alert_color")]
    pub alert_color: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/ringdown/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_accent_color() -> String {
    "#02e4e9".into()
}
fn default_alert_color() -> String {
    "#ff073a".into()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            alert_color: default_alert_color(),
        }
    }
}

/// Returns `~/.config/ringdown/`, creating it if needed.
fn config_dir() -> Result<PathBuf, ConfigError> {
    let dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("ringdown");
    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from disk, writing the defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// if the default config cannot be written to disk.
    pub fn load() -> Result<Self, CoreError> {
        let path = Self::path()?;
        Ok(Self::load_from(&path)?)
    }

    /// Load from an explicit path. Split out from [`Config::load`] so tests
    /// can run against a temporary directory.
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), CoreError> {
        Ok(self.save_to(&Self::path()?)?)
    }

    fn save_to(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
