//! Configuration management for shoplist.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding [`StorageConfig::data_dir`].
pub const ENV_DATA_DIR: &str = "SHOPLIST_DATA_DIR";
/// Environment variable overriding [`ExportConfig::title`].
pub const ENV_EXPORT_TITLE: &str = "SHOPLIST_EXPORT_TITLE";
/// Environment variable overriding [`LoggingConfig::level`].
pub const ENV_LOG_LEVEL: &str = "SHOPLIST_LOG_LEVEL";

/// Main application configuration.
///
/// This is loaded from `~/.config/shoplist/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where persisted list state lives
    pub storage: StorageConfig,
    /// PDF export settings
    pub export: ExportConfig,
    /// Log output settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the default path, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, falling back to defaults if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            let contents = fs::read_to_string(path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `SHOPLIST_DATA_DIR`: Override the storage directory
    /// - `SHOPLIST_EXPORT_TITLE`: Override the exported document title
    /// - `SHOPLIST_LOG_LEVEL`: Override the default log filter
    pub fn load_with_env(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Apply overrides from an environment lookup.
    ///
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(dir) = lookup(ENV_DATA_DIR) {
            tracing::debug!("Override storage.data_dir from env: {}", dir);
            self.storage.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(title) = lookup(ENV_EXPORT_TITLE) {
            tracing::debug!("Override export.title from env: {}", title);
            self.export.title = title;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            tracing::debug!("Override logging.level from env: {}", level);
            self.logging.level = level;
        }
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/shoplist/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Resolve the directory holding persisted list state.
    ///
    /// Uses `storage.data_dir` when set, otherwise the XDG data directory:
    /// `~/.local/share/shoplist`
    pub fn data_dir(&self) -> ConfigResult<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(project_dirs()?.data_dir().to_path_buf()),
        }
    }
}

fn project_dirs() -> ConfigResult<ProjectDirs> {
    ProjectDirs::from("com", "shoplist", "shoplist").ok_or(ConfigError::NoConfigDir)
}

/// Storage location settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for the persisted keys (platform data dir when unset)
    pub data_dir: Option<PathBuf>,
}

/// PDF export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Title printed above the table
    pub title: String,
    /// Header of the name column
    pub name_header: String,
    /// Header of the category column
    pub category_header: String,
    /// File name used when no output path is given
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            title: "Shopping List".to_string(),
            name_header: "Name".to_string(),
            category_header: "Category".to_string(),
            file_name: "shopping-list.pdf".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
