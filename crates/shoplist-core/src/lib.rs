//! Shoplist Core - Foundation crate for the shoplist application.
//!
//! This crate provides shared types, error handling, configuration management
//! and the text normalization rule that every other shoplist crate depends on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared newtypes and enums (`ItemId`, `ThemePreference`)
//! - [`text`] - Lowercase normalization and case-insensitive matching
//!
//! # Example
//!
//! ```rust
//! use shoplist_core::{normalize, AppConfig, ThemePreference};
//!
//! let config = AppConfig::default();
//! assert_eq!(config.export.title, "Shopping List");
//!
//! assert_eq!(normalize("Pão"), "pão");
//! assert_eq!(ThemePreference::default().toggled(), ThemePreference::Dark);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod text;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, ExportConfig, LoggingConfig, StorageConfig};
pub use error::{ConfigError, ConfigResult, Result, ShoplistError};
pub use text::{contains_ignore_case, normalize, require_non_blank};
pub use types::{ItemId, ThemePreference};
