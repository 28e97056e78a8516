//! Configuration management for txtsearch.
//!
//! This module provides configuration loading, saving, and defaults.
//! Configuration is stored in TOML format in a platform-appropriate location.
//! Command-line flags are applied on top of the loaded values.

use crate::copier::OutputDirPolicy;
use crate::error::{Result, TxtSearchError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Main configuration structure for txtsearch.
///
/// ## Example Configuration File (txtsearch.toml)
///
/// ```toml
/// [general]
/// log_level = "warn"
///
/// [search]
/// case_sensitive = false
///
/// [output]
/// reuse_existing = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Matching defaults
    pub search: SearchConfig,

    /// Output directory handling
    pub output: OutputConfig,
}

/// General configuration options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            log_level: "warn".to_string(),
        }
    }
}

/// Matching configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Match case exactly by default
    pub case_sensitive: bool,
}

/// Output directory configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Copy into an existing output directory instead of failing
    pub reuse_existing: bool,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default config if no config file exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Config::default());
        }

        info!(path = %path.display(), "Loading configuration");
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents).map_err(|e| TxtSearchError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
        })?;

        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        info!(path = %path.display(), "Saving configuration");
        let contents = toml::to_string_pretty(self).map_err(|e| TxtSearchError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> Result<PathBuf> {
        let dirs =
            ProjectDirs::from("", "", "txtsearch").ok_or_else(|| TxtSearchError::ConfigError {
                reason: "Could not determine config directory".to_string(),
            })?;

        Ok(dirs.config_dir().join("txtsearch.toml"))
    }

    /// Output directory policy implied by this configuration.
    pub fn output_policy(&self) -> OutputDirPolicy {
        if self.output.reuse_existing {
            OutputDirPolicy::ReuseExisting
        } else {
            OutputDirPolicy::CreateNew
        }
    }
}
