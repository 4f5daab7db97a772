//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{Config, CONFIG_DIR_NAME};
use crate::store::write_atomic;

impl Config {
    /// Get the global config directory path (~/.addrgroups/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
    }

    /// Get the global config file path (~/.addrgroups/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Get the per-directory config file path (<dir>/.addrgroups/config.toml)
    pub fn local_config_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_DIR_NAME).join("config.toml")
    }

    /// Save configuration to a file with atomic write and file locking.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        write_atomic(path, content.as_bytes())
            .with_context(|| format!("Failed to save config: {}", path.display()))
    }
}
