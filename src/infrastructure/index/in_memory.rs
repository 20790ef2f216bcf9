//! In-memory similarity index

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::scan::nearest_in_partition;
use crate::domain::{Document, DomainError, PartitionKey, ScoredDocument, SimilarityIndex};

/// In-memory similarity index using a linear partition scan.
///
/// Suitable for tests and ephemeral runs; nothing survives the
/// process. Use `JsonFileIndex` for a durable store.
#[derive(Debug, Default)]
pub struct InMemoryIndex {
    documents: RwLock<HashMap<String, Document>>,
}

impl InMemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SimilarityIndex for InMemoryIndex {
    async fn upsert(&self, document: Document) -> Result<(), DomainError> {
        let mut documents = self
            .documents
            .write()
            .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {}", e)))?;

        documents.insert(document.id().to_string(), document);

        Ok(())
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

        Ok(documents.remove(id).is_some())
    }

    async fn len(&self) -> Result<usize, DomainError> {
        let documents = self
            .documents
            .read()
            .map_err(|e| DomainError::internal(format!("Failed to acquire read lock: {}", e)))?;

        Ok(documents.len())
    }
}
