//! File-backed similarity index
//!
//! A JSON snapshot of every stored document, loaded once at open and
//! rewritten after each mutation. Reads are served from memory, so the
//! owning process always sees its own writes. The snapshot is written
//! to a temp file and renamed into place so a crash mid-write leaves
//! the previous snapshot intact.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scan::nearest_in_partition;
use crate::domain::{Document, DomainError, PartitionKey, ScoredDocument, SimilarityIndex};

/// On-disk snapshot format version
const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    schema_version: u32,
    documents: Vec<Document>,
}

/// Durable similarity index persisted as a JSON snapshot file
#[derive(Debug)]
pub struct JsonFileIndex {
    path: PathBuf,
    documents: RwLock<HashMap<String, Document>>,
}

impl JsonFileIndex {
    /// Open an index at `path`, loading the existing snapshot if any
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let documents = Self::load(&path)?;

        debug!(
            "Opened similarity index at {} with {} documents",
            path.display(),
            documents.len()
        );

        Ok(Self {
            path,
            documents: RwLock::new(documents),
        })
    }

    fn load(path: &Path) -> Result<HashMap<String, Document>, DomainError> {
        if !path.exists() {
            return Ok(HashMap::new());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            DomainError::storage(format!("Failed to read index file {}: {}", path.display(), e))
        })?;

        if contents.trim().is_empty() {
            return Ok(HashMap::new());
        }

        let snapshot: Snapshot = serde_json::from_str(&contents).map_err(|e| {
            DomainError::storage(format!(
                "Failed to parse index file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(snapshot
            .documents
            .into_iter()
            .map(|d| (d.id().to_string(), d))
            .collect())
    }

    /// Rewrite the snapshot; the write is not durable until the rename
    fn persist(&self, documents: &HashMap<String, Document>) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    DomainError::storage(format!(
                        "Failed to create index directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let snapshot = Snapshot {
            schema_version: SNAPSHOT_VERSION,
            documents: documents.values().cloned().collect(),
        };

        let json = serde_json::to_string(&snapshot)
            .map_err(|e| DomainError::storage(format!("Failed to serialize index: {}", e)))?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, json).map_err(|e| {
            DomainError::storage(format!(
                "Failed to write index file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            DomainError::storage(format!(
                "Failed to replace index file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }
}

#[async_trait]
impl SimilarityIndex for JsonFileIndex {
    async fn upsert(&self, document: Document) -> Result<(), DomainError> {
        let mut documents = self
            .documents
            .write()
            .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {}", e)))?;

        documents.insert(document.id().to_string(), document);
        self.persist(&documents)
    }

    async fn query(
        &self,
        embedding: &[f32],
        partition: &PartitionKey,
        k: usize,
    ) -> Result<Vec<ScoredDocument>, DomainError> {
        let documents = self
            .documents
            .read()
            .map_err(|e| DomainError::internal(format!("Failed to acquire read lock: {}", e)))?;

        Ok(nearest_in_partition(&documents, embedding, partition, k))
    }

    async fn remove(&self, id: &str) -> Result<bool, DomainError> {
        let mut documents = self
            .documents
            .write()
            .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {}", e)))?;

        let removed = documents.remove(id).is_some();

        if removed {
            self.persist(&documents)?;
        }

        Ok(removed)
    }

    async fn len(&self) -> Result<usize, DomainError> {
        let documents = self
            .documents
            .read()
            .map_err(|e| DomainError::internal(format!("Failed to acquire read lock: {}", e)))?;

        Ok(documents.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, partition: &str, embedding: Vec<f32>, payload: &str) -> Document {
        Document::new(
            id,
            format!("query for {}", id),
            PartitionKey::new(partition),
            payload,
            embedding,
        )
    }

    #[tokio::test]
    async fn test_open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let index = JsonFileIndex::open(dir.path().join("index.json")).unwrap();

        assert_eq!(index.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_snapshot_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");

        {
            let index = JsonFileIndex::open(&path).unwrap();
            index
                .upsert(doc("doc-1", "entry", vec![1.0, 0.0], "first"))
                .await
                .unwrap();
            index
                .upsert(doc("doc-2", "senior", vec![0.0, 1.0], "second"))
                .await
                .unwrap();
        }

        let reopened = JsonFileIndex::open(&path).unwrap();
        assert_eq!(reopened.len().await.unwrap(), 2);

        let results = reopened
            .query(&[1.0, 0.0], &PartitionKey::new("entry"), 1)
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].document.payload(), "first");
    }

    #[tokio::test]
    async fn test_upsert_overwrites_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");

        let index = JsonFileIndex::open(&path).unwrap();
        index
            .upsert(doc("doc-1", "entry", vec![1.0, 0.0], "first"))
            .await
            .unwrap();
        index
            .upsert(doc("doc-1", "entry", vec![1.0, 0.0], "second"))
            .await
            .unwrap();

        let reopened = JsonFileIndex::open(&path).unwrap();
        assert_eq!(reopened.len().await.unwrap(), 1);

        let results = reopened
            .query(&[1.0, 0.0], &PartitionKey::new("entry"), 1)
            .await
            .unwrap();
        assert_eq!(results[0].document.payload(), "second");
    }

    #[tokio::test]
    async fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");

        let index = JsonFileIndex::open(&path).unwrap();
        index
            .upsert(doc("doc-1", "entry", vec![1.0, 0.0], "payload"))
            .await
            .unwrap();

        assert!(index.remove("doc-1").await.unwrap());

        let reopened = JsonFileIndex::open(&path).unwrap();
        assert_eq!(reopened.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("index.json");

        let index = JsonFileIndex::open(&path).unwrap();
        index
            .upsert(doc("doc-1", "entry", vec![1.0, 0.0], "payload"))
            .await
            .unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_open_corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        fs::write(&path, "not json at all").unwrap();

        let result = JsonFileIndex::open(&path);

        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }

    #[test]
    fn test_open_empty_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        fs::write(&path, "").unwrap();

        let index = JsonFileIndex::open(&path).unwrap();
        let documents = index.documents.read().unwrap();

        assert!(documents.is_empty());
    }
}
