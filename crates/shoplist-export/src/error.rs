//! Export error types.

use thiserror::Error;

/// Errors raised while building or writing a document.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Document structure could not be encoded.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Output file could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
