//! Outfit recommendation engine.

use std::path::Path;

use tracing::{debug, info};

use stylist_catalog::read_catalog;
use stylist_embeddings::{
    CatalogSnapshot, Embedding, EmbeddingProvider, EmbeddingRequest, SnapshotEntry, SnapshotStore,
    file_digest, rank,
};

use crate::chat::{ChatClient, ChatMessage};
use crate::config::{PromptMode, StylistConfig};
use crate::error::{Result, StylistError};
use crate::prompt;

/// Load catalog embeddings, regenerating them only when the catalog file
/// changed.
///
/// The catalog digest and embedding model are compared against the stored
/// snapshot. On a match the cached entries come back untouched and the
/// provider is never called. On a miss the catalog is re-read, every
/// description is embedded, and the snapshot is rewritten in full before
/// the fresh entries are returned. There is no partial update.
pub async fn load_or_generate<P: EmbeddingProvider>(
    source_path: &Path,
    snapshot_path: &Path,
    provider: &P,
    model: &str,
) -> Result<Vec<SnapshotEntry>> {
    let digest = file_digest(source_path).await?;
    let store = SnapshotStore::new(snapshot_path);

    match store.load().await? {
        Some(snapshot) if snapshot.is_current(&digest, model) => {
            info!("Using cached embeddings (no catalog changes detected)");
            return Ok(snapshot.entries);
        }
        Some(_) => info!("Catalog or model changed, regenerating embeddings"),
        None => info!("No usable snapshot, generating embeddings"),
    }

    let items = read_catalog(source_path)?;
    let descriptions: Vec<String> = items.iter().map(|item| item.description()).collect();

    debug!("Embedding {} catalog items", descriptions.len());
    let requests: Vec<EmbeddingRequest> = descriptions
        .iter()
        .map(|d| EmbeddingRequest::new(d.clone()).with_model(model))
        .collect();
    let responses = provider.embed_batch(requests).await?;

    let entries: Vec<SnapshotEntry> = descriptions
        .into_iter()
        .zip(responses)
        .map(|(description, response)| SnapshotEntry {
            description,
            embedding: response.embedding,
        })
        .collect();

    let snapshot = CatalogSnapshot::new(digest, model, entries);
    store.save(&snapshot).await?;
    info!("Snapshot updated with {} entries", snapshot.entries.len());

    Ok(snapshot.entries)
}

/// The outfit recommender.
///
/// Loads the catalog once at construction; the item collection is
/// read-only afterwards, so a shared reference can serve queries without
/// locking.
#[derive(Debug)]
pub struct Stylist<P> {
    /// Configuration.
    config: StylistConfig,

    /// Embedding provider for queries.
    provider: P,

    /// Chat client for the generation model.
    chat: ChatClient,

    /// Item descriptions, in catalog order.
    descriptions: Vec<String>,

    /// Item embeddings, parallel to `descriptions`. Empty in full-catalog
    /// mode.
    embeddings: Vec<Embedding>,
}

impl<P: EmbeddingProvider> Stylist<P> {
    /// Build a stylist for the configured catalog.
    ///
    /// Retrieval mode loads or regenerates the embedding snapshot;
    /// full-catalog mode only reads descriptions and never touches the
    /// embedding provider.
    pub async fn new(config: StylistConfig, provider: P, chat: ChatClient) -> Result<Self> {
        let (descriptions, embeddings) = match config.prompt.mode {
            PromptMode::Retrieval => {
                let entries = load_or_generate(
                    &config.catalog_path,
                    &config.snapshot_path,
                    &provider,
                    &config.embedding_model,
                )
                .await?;

                let mut descriptions = Vec::with_capacity(entries.len());
                let mut embeddings = Vec::with_capacity(entries.len());
                for entry in entries {
                    descriptions.push(entry.description);
                    embeddings.push(entry.embedding);
                }
                (descriptions, embeddings)
            }
            PromptMode::FullCatalog => {
                let items = read_catalog(&config.catalog_path)?;
                let descriptions = items.iter().map(|item| item.description()).collect();
                (descriptions, Vec::new())
            }
        };

        if descriptions.is_empty() {
            return Err(StylistError::EmptyCatalog);
        }

        info!("Stylist ready with {} items", descriptions.len());

        Ok(Self {
            config,
            provider,
            chat,
            descriptions,
            embeddings,
        })
    }

    /// Number of loaded catalog items.
    pub fn item_count(&self) -> usize {
        self.descriptions.len()
    }

    /// Select the descriptions that go into the prompt for this query.
    async fn select_descriptions(&self, query: &str) -> Result<Vec<String>> {
        match self.config.prompt.mode {
            PromptMode::FullCatalog => Ok(self.descriptions.clone()),
            PromptMode::Retrieval => {
                let request = EmbeddingRequest::new(query)
                    .with_model(self.config.embedding_model.as_str());
                let response = self.provider.embed(request).await?;

                let ranked = rank(
                    &response.embedding,
                    &self.embeddings,
                    self.config.prompt.top_n,
                )?;

                debug!("Top match score: {:?}", ranked.first().map(|r| r.score));

                Ok(ranked
                    .into_iter()
                    .map(|r| self.descriptions[r.index].clone())
                    .collect())
            }
        }
    }

    /// Answer a free-text query with an outfit recommendation.
    pub async fn answer(&self, query: &str) -> Result<String> {
        debug!("Processing query: {query}");

        let selected = self.select_descriptions(query).await?;
        let prompt = match self.config.prompt.mode {
            PromptMode::Retrieval => prompt::outfit_prompt(&selected, query),
            PromptMode::FullCatalog => prompt::full_catalog_prompt(&selected, query),
        };

        self.chat.chat(vec![ChatMessage::user(prompt)]).await
    }
}
