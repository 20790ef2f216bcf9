//! Semantic cache over the similarity index
//!
//! Owns the lookup-or-miss decision: queries are matched by embedding
//! similarity within their partition, and commits derive a stable
//! document id from the normalized query so recurring queries
//! overwrite in place instead of accumulating duplicates.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    fingerprint, normalize, Document, DomainError, PartitionKey, SemanticCacheConfig,
    SimilarityIndex, TextEmbedder,
};

/// Semantic cache service
#[derive(Debug)]
pub struct SemanticCacheService {
    index: Arc<dyn SimilarityIndex>,
    embedder: Arc<dyn TextEmbedder>,
    config: SemanticCacheConfig,
}

impl SemanticCacheService {
    /// Create a cache with the default configuration
    pub fn new(index: Arc<dyn SimilarityIndex>, embedder: Arc<dyn TextEmbedder>) -> Self {
        Self::with_config(index, embedder, SemanticCacheConfig::default())
    }

    /// Create a cache with a custom configuration
    pub fn with_config(
        index: Arc<dyn SimilarityIndex>,
        embedder: Arc<dyn TextEmbedder>,
        config: SemanticCacheConfig,
    ) -> Self {
        Self {
            index,
            embedder,
            config,
        }
    }

    pub fn config(&self) -> &SemanticCacheConfig {
        &self.config
    }

    /// Empty queries embed to a degenerate vector that would match
    /// anything, so they are rejected before the embedder runs.
    fn validate_query(query_text: &str) -> Result<(), DomainError> {
        if query_text.trim().is_empty() {
            return Err(DomainError::validation("query text must not be empty"));
        }

        Ok(())
    }

    /// Find a cached document semantically equivalent to `query_text`
    /// within `partition`.
    ///
    /// A hit requires cosine similarity at or above the configured
    /// threshold (distance at or below the cutoff). Anything else is a
    /// miss, returned as `Ok(None)` rather than an error.
    pub async fn lookup(
        &self,
        query_text: &str,
        partition: &PartitionKey,
    ) -> Result<Option<Document>, DomainError> {
        Self::validate_query(query_text)?;

        let embedding = self.embedder.embed(query_text).await?;
        let matches = self.index.query(&embedding, partition, 1).await?;

        match matches.into_iter().next() {
            Some(best) if best.distance <= self.config.distance_cutoff() => {
                debug!(
                    "Cache hit with similarity {:.4} for document {}",
                    best.similarity(),
                    best.document.id()
                );
                Ok(Some(best.document))
            }
            Some(best) => {
                debug!(
                    "Best match similarity {:.4} below threshold {:.4}, treating as miss",
                    best.similarity(),
                    self.config.similarity_threshold
                );
                Ok(None)
            }
            None => {
                debug!("No documents in partition {}", partition);
                Ok(None)
            }
        }
    }

    /// Store `payload` under the fingerprint of (normalized query,
    /// partition), overwriting any previous document with the same id.
    pub async fn commit(
        &self,
        query_text: &str,
        partition: &PartitionKey,
        payload: impl Into<String>,
    ) -> Result<Document, DomainError> {
        Self::validate_query(query_text)?;

        let id = fingerprint(&normalize(query_text), partition);
        let embedding = self.embedder.embed(query_text).await?;

        let document = Document::new(id, query_text, partition.clone(), payload, embedding);

        self.index.upsert(document.clone()).await?;

        debug!(
            "Committed document {} to partition {}",
            document.id(),
            partition
        );

        Ok(document)
    }

    /// Administratively remove the document for a (query, partition)
    /// pair; returns whether anything was stored under that id.
    pub async fn remove(
        &self,
        query_text: &str,
        partition: &PartitionKey,
    ) -> Result<bool, DomainError> {
        Self::validate_query(query_text)?;

        let id = fingerprint(&normalize(query_text), partition);
        self.index.remove(&id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::embedding::MockEmbedder;
    use crate::infrastructure::index::InMemoryIndex;

    fn create_cache(embedder: MockEmbedder) -> SemanticCacheService {
        SemanticCacheService::with_config(
            Arc::new(InMemoryIndex::new()),
            Arc::new(embedder),
            SemanticCacheConfig::new().with_similarity_threshold(0.8),
        )
    }

    #[tokio::test]
    async fn test_commit_then_lookup_hits() {
        let cache = create_cache(MockEmbedder::new(8));
        let partition = PartitionKey::new("entry");

        cache
            .commit("Frontend Developer", &partition, "Q1: ...")
            .await
            .unwrap();

        let hit = cache.lookup("Frontend Developer", &partition).await.unwrap();

        assert_eq!(hit.unwrap().payload(), "Q1: ...");
    }

    #[tokio::test]
    async fn test_partition_isolation() {
        let cache = create_cache(MockEmbedder::new(8));

        cache
            .commit("Frontend Developer", &PartitionKey::new("entry"), "A")
            .await
            .unwrap();

        let other = cache
            .lookup("Frontend Developer", &PartitionKey::new("senior"))
            .await
            .unwrap();

        assert!(other.is_none());
    }

    #[tokio::test]
    async fn test_threshold_boundary_inclusive() {
        // Stored [4, 3] vs queried [1, 0]: cosine similarity exactly
        // 4/5 = 0.8, right at the threshold. `>=` semantics make it a
        // hit.
        let embedder = MockEmbedder::new(2)
            .with_vector("stored role", vec![4.0, 3.0])
            .with_vector("queried role", vec![1.0, 0.0]);
        let cache = create_cache(embedder);
        let partition = PartitionKey::new("entry");

        cache
            .commit("stored role", &partition, "payload")
            .await
            .unwrap();

        let hit = cache.lookup("queried role", &partition).await.unwrap();

        assert!(hit.is_some());
    }

    #[tokio::test]
    async fn test_below_threshold_is_miss() {
        // Similarity ~0.79, just under the 0.8 threshold
        let embedder = MockEmbedder::new(2)
            .with_vector("stored role", vec![0.79, 0.613])
            .with_vector("queried role", vec![1.0, 0.0]);
        let cache = create_cache(embedder);
        let partition = PartitionKey::new("entry");

        cache
            .commit("stored role", &partition, "payload")
            .await
            .unwrap();

        let miss = cache.lookup("queried role", &partition).await.unwrap();

        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn test_empty_query_rejected_on_lookup() {
        let cache = create_cache(MockEmbedder::new(8));

        let result = cache.lookup("", &PartitionKey::new("entry")).await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_whitespace_query_rejected_on_commit() {
        let cache = create_cache(MockEmbedder::new(8));

        let result = cache.commit("   \n", &PartitionKey::new("entry"), "x").await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_recommit_overwrites_single_document() {
        let index = Arc::new(InMemoryIndex::new());
        let cache = SemanticCacheService::with_config(
            index.clone(),
            Arc::new(MockEmbedder::new(8)),
            SemanticCacheConfig::default(),
        );
        let partition = PartitionKey::new("entry");

        cache
            .commit("Frontend Developer", &partition, "first")
            .await
            .unwrap();
        // Same query modulo case and whitespace: same fingerprint
        cache
            .commit("  frontend developer ", &partition, "second")
            .await
            .unwrap();

        assert_eq!(index.len().await.unwrap(), 1);

        let hit = cache.lookup("Frontend Developer", &partition).await.unwrap();
        assert_eq!(hit.unwrap().payload(), "second");
    }

    #[tokio::test]
    async fn test_lookup_on_empty_store_is_miss() {
        let cache = create_cache(MockEmbedder::new(8));

        let result = cache
            .lookup("Frontend Developer", &PartitionKey::new("entry"))
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_remove() {
        let cache = create_cache(MockEmbedder::new(8));
        let partition = PartitionKey::new("entry");

        cache
            .commit("Frontend Developer", &partition, "payload")
            .await
            .unwrap();

        assert!(cache.remove("FRONTEND DEVELOPER", &partition).await.unwrap());
        assert!(cache
            .lookup("Frontend Developer", &partition)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_commit_returns_document() {
        let cache = create_cache(MockEmbedder::new(8));
        let partition = PartitionKey::new("mid");

        let document = cache
            .commit("Data Analyst", &partition, "content")
            .await
            .unwrap();

        assert_eq!(document.query_text(), "Data Analyst");
        assert_eq!(document.partition_key(), &partition);
        assert_eq!(document.payload(), "content");
        assert_eq!(document.embedding().len(), 8);
    }
}
