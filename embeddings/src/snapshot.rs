//! Catalog embedding snapshot.
//!
//! The snapshot is the single durable artifact of the system: the SHA-256
//! digest of the catalog file, the embedding model, and one
//! description/embedding pair per catalog item. A stored digest equal to the
//! current file digest means the stored embeddings are current; nothing
//! beyond that comparison is verified.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::Embedding;
use crate::error::Result;

/// One description/embedding pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    /// The item description that was embedded.
    pub description: String,

    /// The embedding vector.
    pub embedding: Embedding,
}

/// The persisted snapshot of catalog embeddings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// SHA-256 hex digest of the catalog file the entries were built from.
    pub digest: String,

    /// Embedding model the entries were generated with.
    pub model: String,

    /// Description/embedding pairs, in catalog order.
    pub entries: Vec<SnapshotEntry>,

    /// When the snapshot was written (unix seconds).
    pub created_at: u64,
}

impl CatalogSnapshot {
    /// Build a snapshot for the given digest and model.
    pub fn new(
        digest: impl Into<String>,
        model: impl Into<String>,
        entries: Vec<SnapshotEntry>,
    ) -> Self {
        Self {
            digest: digest.into(),
            model: model.into(),
            entries,
            created_at: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default(),
        }
    }

    /// Whether this snapshot matches the given catalog digest and model.
    pub fn is_current(&self, digest: &str, model: &str) -> bool {
        self.digest == digest && self.model == model
    }
}

/// Compute the SHA-256 hex digest of a file's raw bytes.
pub async fn file_digest(path: impl AsRef<Path>) -> Result<String> {
    let content = fs::read(path.as_ref()).await?;
    let digest = Sha256::digest(&content);
    Ok(format!("{digest:x}"))
}

/// Reads and writes the snapshot file.
pub struct SnapshotStore {
    /// Path of the snapshot file.
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store for the given snapshot path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot from disk.
    ///
    /// Returns `Ok(None)` when no snapshot file exists. A snapshot that
    /// exists but cannot be parsed is treated the same way, after a
    /// warning: the caller regenerates instead of crashing on a file that
    /// a half-finished earlier run may have left behind.
    pub async fn load(&self) -> Result<Option<CatalogSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).await?;
        match serde_json::from_str::<CatalogSnapshot>(&content) {
            Ok(snapshot) => {
                info!(
                    "Loaded snapshot with {} entries from {}",
                    snapshot.entries.len(),
                    self.path.display()
                );
                Ok(Some(snapshot))
            }
            Err(e) => {
                warn!(
                    "Malformed snapshot at {}, regenerating: {e}",
                    self.path.display()
                );
                Ok(None)
            }
        }
    }

    /// Write the snapshot to disk, replacing any previous one.
    ///
    /// The write goes through a temp file and a rename so a crash mid-write
    /// cannot leave a truncated snapshot.
    pub async fn save(&self, snapshot: &CatalogSnapshot) -> Result<()> {
        let content = serde_json::to_string(snapshot)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &content).await?;
        fs::rename(&temp_path, &self.path).await?;

        debug!(
            "Saved snapshot with {} entries to {}",
            snapshot.entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_snapshot() -> CatalogSnapshot {
        CatalogSnapshot::new(
            "abc123",
            "all-minilm",
            vec![SnapshotEntry {
                description: "Item: Jeans, Color: Blue, Category: Bottom, Occasion: Casual, Size: M"
                    .to_string(),
                embedding: vec![0.1, 0.2, 0.3],
            }],
        )
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path().join("snapshot.json"));

        store.save(&sample_snapshot()).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.digest, "abc123");
        assert_eq!(loaded.model, "all-minilm");
        assert_eq!(loaded.entries.len(), 1);
        assert_eq!(loaded.entries[0].embedding, vec![0.1, 0.2, 0.3]);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path().join("absent.json"));

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_snapshot_is_a_miss() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        fs::write(&path, "{not json").await.unwrap();

        let store = SnapshotStore::new(&path);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path().join("snapshot.json"));

        store.save(&sample_snapshot()).await.unwrap();

        assert!(!temp_dir.path().join("snapshot.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_file_digest_changes_on_single_byte() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.csv");

        fs::write(&path, "Clothes,Color\nJeans,Blue\n").await.unwrap();
        let before = file_digest(&path).await.unwrap();

        fs::write(&path, "Clothes,Color\nJeans,Bluf\n").await.unwrap();
        let after = file_digest(&path).await.unwrap();

        assert_ne!(before, after);
        assert_eq!(before.len(), 64);
    }

    #[test]
    fn test_is_current() {
        let snapshot = sample_snapshot();
        assert!(snapshot.is_current("abc123", "all-minilm"));
        assert!(!snapshot.is_current("abc124", "all-minilm"));
        assert!(!snapshot.is_current("abc123", "other-model"));
    }
}
