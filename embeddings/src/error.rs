//! Error types for the embeddings crate.

use thiserror::Error;

/// Result type alias for embedding operations.
pub type Result<T> = std::result::Result<T, EmbeddingError>;

/// Errors that can occur while generating or ranking embeddings.
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// The embedding API returned a non-success status.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The embedding API returned an unusable body.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Two vectors of different lengths were compared.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
