//! # Stylist Engine
//!
//! This crate ties the pieces together into an outfit recommender:
//!
//! - **Catalog**: item records and descriptions
//! - **Embeddings**: the snapshot keyed by the catalog digest
//! - **Chat**: a single-turn call to the generation model
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stylist_embeddings::OllamaProvider;
//! use stylist_engine::{ChatClient, Stylist, StylistConfig};
//!
//! let config = StylistConfig::new("assets/clothes.csv");
//! let stylist = Stylist::new(config, OllamaProvider::new(), ChatClient::new()).await?;
//!
//! let answer = stylist.answer("something warm for a hike").await?;
//! ```

pub mod chat;
pub mod config;
pub mod engine;
pub mod error;
pub mod prompt;

pub use chat::{ChatClient, ChatMessage};
pub use config::{PromptConfig, PromptMode, StylistConfig};
pub use engine::{Stylist, load_or_generate};
pub use error::{Result, StylistError};

// Re-export from dependencies for convenience
pub use stylist_catalog::{ItemRecord, read_catalog};
pub use stylist_embeddings::{EmbeddingProvider, SnapshotEntry};
