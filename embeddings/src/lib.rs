//! # Embeddings
//!
//! This crate turns catalog descriptions and user queries into dense
//! vectors and ranks them by cosine similarity.
//!
//! ## Features
//!
//! - **Embedding Generation**: Convert text to vectors via an Ollama server
//! - **Similarity Ranking**: Score and order candidates against a query
//! - **Catalog Snapshot**: Persist embeddings keyed by the catalog digest,
//!   so embeddings are regenerated only when the catalog file changes

pub mod error;
pub mod provider;
pub mod similarity;
pub mod snapshot;

pub use error::{EmbeddingError, Result};
pub use provider::{EmbeddingProvider, EmbeddingRequest, EmbeddingResponse, OllamaProvider};
pub use similarity::{Ranked, cosine_similarity, rank};
pub use snapshot::{CatalogSnapshot, SnapshotEntry, SnapshotStore, file_digest};

/// A dense vector embedding.
pub type Embedding = Vec<f32>;

/// Dimension of embeddings produced by the default model (all-minilm).
pub const DEFAULT_DIMENSION: usize = 384;
