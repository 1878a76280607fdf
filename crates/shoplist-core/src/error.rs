//! Core error types for the shoplist application.
//!
//! This module defines the central error type used across all subsystems.
//! Each subsystem error is represented as a variant for clear error propagation.

use thiserror::Error;

/// Central error type for all shoplist operations.
///
/// Each variant represents an error from a specific subsystem, allowing
/// for clear error propagation and handling across module boundaries.
#[derive(Error, Debug)]
pub enum ShoplistError {
    /// Validation errors (empty fields, malformed identifiers)
    #[error("validation error: {0}")]
    Validation(String),

    /// No item matched the given identifier
    #[error("item not found: {0}")]
    NotFound(String),

    /// An identifier prefix matched more than one item
    #[error("ambiguous item id '{prefix}': matches {count} items")]
    Ambiguous {
        /// The prefix that was looked up
        prefix: String,
        /// Number of items that share the prefix
        count: usize,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using `ShoplistError`.
pub type Result<T> = std::result::Result<T, ShoplistError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShoplistError::Validation("name must not be empty".to_string());
        assert_eq!(err.to_string(), "validation error: name must not be empty");

        let err = ShoplistError::Ambiguous {
            prefix: "ab".to_string(),
            count: 2,
        };
        assert_eq!(err.to_string(), "ambiguous item id 'ab': matches 2 items");

        let err = ConfigError::NoConfigDir;
        assert_eq!(
            err.to_string(),
            "could not determine config directory (XDG base directories not available)"
        );
    }

    #[test]
    fn test_config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
