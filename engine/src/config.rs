//! Configuration for the stylist engine.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default embedding model.
pub const DEFAULT_EMBEDDING_MODEL: &str = "all-minilm";

/// Default chat model.
pub const DEFAULT_CHAT_MODEL: &str = "phi3:mini";

/// Default number of items sent to the chat model in retrieval mode.
pub const DEFAULT_TOP_N: usize = 5;

/// Configuration for the stylist engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StylistConfig {
    /// Path of the clothing catalog CSV.
    pub catalog_path: PathBuf,

    /// Path of the embedding snapshot file.
    pub snapshot_path: PathBuf,

    /// Ollama base URL; `None` lets the provider and chat client fall back
    /// to `OLLAMA_HOST` or the local default.
    pub ollama_url: Option<String>,

    /// Embedding model identifier.
    pub embedding_model: String,

    /// Chat model identifier.
    pub chat_model: String,

    /// Prompt construction configuration.
    pub prompt: PromptConfig,
}

impl StylistConfig {
    /// Create a configuration for the given catalog path. The snapshot
    /// lands next to the catalog.
    pub fn new(catalog_path: impl Into<PathBuf>) -> Self {
        let catalog_path = catalog_path.into();
        let snapshot_path = catalog_path.with_extension("embeddings.json");

        Self {
            catalog_path,
            snapshot_path,
            ollama_url: None,
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            prompt: PromptConfig::default(),
        }
    }

    /// Set the snapshot path.
    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = path.into();
        self
    }

    /// Set the Ollama base URL.
    pub fn with_ollama_url(mut self, url: impl Into<String>) -> Self {
        self.ollama_url = Some(url.into());
        self
    }

    /// Set the embedding model.
    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = model.into();
        self
    }

    /// Set the chat model.
    pub fn with_chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = model.into();
        self
    }

    /// Set the prompt mode.
    pub fn with_prompt_mode(mut self, mode: PromptMode) -> Self {
        self.prompt.mode = mode;
        self
    }

    /// Set how many items are sent to the chat model in retrieval mode.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.prompt.top_n = top_n;
        self
    }
}

impl Default for StylistConfig {
    fn default() -> Self {
        Self::new("assets/clothes.csv")
    }
}

/// Configuration for prompt construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// How catalog items are selected for the prompt.
    pub mode: PromptMode,

    /// Number of items in retrieval mode.
    pub top_n: usize,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            mode: PromptMode::Retrieval,
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// How catalog items are selected for the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptMode {
    /// Embed the query and send only the most similar items.
    Retrieval,

    /// Send every catalog item; no embeddings, no snapshot.
    FullCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_snapshot_path_defaults_next_to_catalog() {
        let config = StylistConfig::new("assets/clothes.csv");
        assert_eq!(
            config.snapshot_path,
            PathBuf::from("assets/clothes.embeddings.json")
        );
    }

    #[test]
    fn test_builder_methods() {
        let config = StylistConfig::new("data.csv")
            .with_ollama_url("http://ollama:11434")
            .with_prompt_mode(PromptMode::FullCatalog)
            .with_top_n(3);

        assert_eq!(config.ollama_url.as_deref(), Some("http://ollama:11434"));
        assert_eq!(config.prompt.mode, PromptMode::FullCatalog);
        assert_eq!(config.prompt.top_n, 3);
    }
}
