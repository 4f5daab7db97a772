//! Configuration loading and management

mod io;
mod settings;

pub use settings::{GuiSettings, ImportSettings};

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Directory name used for per-directory and global configuration
pub const CONFIG_DIR_NAME: &str = ".addrgroups";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Bulk import settings
    #[serde(default)]
    pub import: ImportSettings,

    /// Dialog window settings
    #[serde(default)]
    pub gui: GuiSettings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration for a working directory
    ///
    /// Looks for `<dir>/.addrgroups/config.toml`, then the global
    /// `~/.addrgroups/config.toml`, then falls back to defaults.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let local_path = Self::local_config_path(dir);
        if local_path.exists() {
            return Self::from_file(&local_path);
        }

        let global_path = Self::global_config_path();
        if global_path.exists() {
            return Self::from_file(&global_path);
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Resolve the configuration to use, honouring an explicit override path
    pub fn resolve(work_dir: &Path, override_path: Option<&Path>) -> Result<Self> {
        match override_path {
            Some(path) => Self::from_file(path),
            None => Self::from_dir(work_dir),
        }
    }
}
