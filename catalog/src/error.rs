//! Error types for catalog loading.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A required column is missing from the header row.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// A row could not be turned into an item record.
    #[error("bad row at line {line}: {message}")]
    Row { line: u64, message: String },

    /// CSV parsing error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
