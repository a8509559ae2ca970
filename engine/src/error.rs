//! Error types for the stylist engine.

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, StylistError>;

/// Errors that can occur in the stylist engine.
#[derive(Error, Debug)]
pub enum StylistError {
    /// Catalog loading error.
    #[error("catalog error: {0}")]
    Catalog(#[from] stylist_catalog::CatalogError),

    /// Embedding error.
    #[error("embedding error: {0}")]
    Embedding(#[from] stylist_embeddings::EmbeddingError),

    /// The chat API returned a non-success status.
    #[error("chat API request failed: {0}")]
    ChatApi(String),

    /// The chat API returned an unusable body.
    #[error("invalid chat response: {0}")]
    InvalidChatResponse(String),

    /// The catalog loaded but contained no items.
    #[error("catalog contains no items")]
    EmptyCatalog,

    /// HTTP error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
