//! Configuration system for yamlkeys.
//!
//! This module provides the configuration structure for the yamlkeys command
//! line tool with sensible defaults and support for serialization via serde.
//! Configuration is read from a TOML file.
//!
//! # Example
//!
//! ```
//! use yamlkeys::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert!(!config.create_backup);
//! assert_eq!(config.log_level, "warn");
//!
//! // Create custom configuration
//! let custom = Config {
//!     create_backup: true,
//!     ..Config::default()
//! };
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for yamlkeys.
///
/// # Fields
///
/// * `create_backup` - Create .bak files before saving (default: false)
/// * `log_level` - Log filter used when `RUST_LOG` is not set (default: "warn")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Create .bak files before saving
    #[serde(default)]
    pub create_backup: bool,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Returns the default log level.
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            create_backup: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/yamlkeys/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("yamlkeys");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring config {}: {:#}", config_path.display(), err);
                Self::default()
            }
        }
    }

    /// Loads configuration from an explicit file, reporting any error.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(config_path)
    }

    /// Saves configuration to an explicit file.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
