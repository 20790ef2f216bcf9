//! Similarity index trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::document::Document;
use crate::domain::partition::PartitionKey;
use crate::domain::DomainError;

/// A document matched by a similarity query, with its cosine distance
/// from the query embedding (0.0 is identical, 2.0 is opposite).
#[derive(Debug, Clone)]
pub struct ScoredDocument {
    /// The matching document
    pub document: Document,
    /// Cosine distance to the query embedding
    pub distance: f32,
}

impl ScoredDocument {
    pub fn new(document: Document, distance: f32) -> Self {
        Self { document, distance }
    }

    /// Cosine similarity equivalent of the stored distance
    pub fn similarity(&self) -> f32 {
        1.0 - self.distance
    }
}

/// Trait for stores of (embedding, payload, partition) tuples.
///
/// Queries are always restricted to a single partition: a query
/// embedding carries no partition information of its own, so comparing
/// it across partitions would match content produced for a different
/// level.
#[async_trait]
pub trait SimilarityIndex: Send + Sync + Debug {
    /// Insert or overwrite a document keyed by its id
    async fn upsert(&self, document: Document) -> Result<(), DomainError>;

    /// Up to `k` nearest documents within `partition`, ascending
    /// distance. An empty or unknown partition yields an empty vec,
    /// never an error.
    async fn query(
        &self,
        embedding: &[f32],
        partition: &PartitionKey,
        k: usize,
    ) -> Result<Vec<ScoredDocument>, DomainError>;

    /// Remove a document by id; returns whether anything was removed
    async fn remove(&self, id: &str) -> Result<bool, DomainError>;

    /// Number of stored documents across all partitions
    async fn len(&self) -> Result<usize, DomainError>;
}
