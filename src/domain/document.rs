//! Cached generation results and their stable identifiers

use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::partition::PartitionKey;

/// A single cached generation result.
///
/// The `id` is a content-derived fingerprint of the normalized query
/// text and the partition key, so the same role asked for at the same
/// level always maps to the same document. Writing a colliding `id`
/// overwrites the stored payload, embedding and timestamp in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Fingerprint of (normalized query text, partition key)
    id: String,
    /// Original query text, preserved unnormalized for display
    query_text: String,
    /// Partition this document belongs to; never changes after creation
    partition_key: PartitionKey,
    /// Generated content, opaque to the cache
    payload: String,
    /// Embedding of `query_text`, fixed to the embedder's dimensionality
    embedding: Vec<f32>,
    /// Unix timestamp (seconds) set at write time
    created_at: u64,
}

impl Document {
    /// Create a new document stamped with the current time
    pub fn new(
        id: impl Into<String>,
        query_text: impl Into<String>,
        partition_key: PartitionKey,
        payload: impl Into<String>,
        embedding: Vec<f32>,
    ) -> Self {
        let created_at = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        Self {
            id: id.into(),
            query_text: query_text.into(),
            partition_key,
            payload: payload.into(),
            embedding,
            created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn partition_key(&self) -> &PartitionKey {
        &self.partition_key
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn embedding(&self) -> &[f32] {
        &self.embedding
    }

    pub fn created_at(&self) -> u64 {
        self.created_at
    }
}

/// Normalize query text for identity purposes: lowercase and trim.
///
/// Only the document id is derived from the normalized form; the
/// original text is what gets embedded and stored.
pub fn normalize(query_text: &str) -> String {
    query_text.trim().to_lowercase()
}

/// Deterministic document id for a (query, partition) pair.
///
/// SHA-256 over the normalized query and the partition key. Stable
/// across runs; not a security boundary.
pub fn fingerprint(normalized_query: &str, partition_key: &PartitionKey) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalized_query.as_bytes());
    hasher.update(b"\n");
    hasher.update(partition_key.as_str().as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = Document::new(
            "doc-1",
            "Frontend Developer",
            PartitionKey::new("entry"),
            "Q1: ...",
            vec![0.1, 0.2, 0.3],
        );

        assert_eq!(doc.id(), "doc-1");
        assert_eq!(doc.query_text(), "Frontend Developer");
        assert_eq!(doc.partition_key().as_str(), "entry");
        assert_eq!(doc.payload(), "Q1: ...");
        assert_eq!(doc.embedding(), &[0.1, 0.2, 0.3]);
        assert!(doc.created_at() > 0);
    }

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize("  Frontend Developer  "), "frontend developer");
        assert_eq!(normalize("DATA ANALYST"), "data analyst");
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let partition = PartitionKey::new("entry");
        let a = fingerprint("frontend developer", &partition);
        let b = fingerprint("frontend developer", &partition);

        assert_eq!(a, b);
        assert_eq!(a.len(), 64); // hex-encoded SHA-256
    }

    #[test]
    fn test_fingerprint_differs_by_partition() {
        let a = fingerprint("frontend developer", &PartitionKey::new("entry"));
        let b = fingerprint("frontend developer", &PartitionKey::new("senior"));

        assert_ne!(a, b);
    }

    #[test]
    fn test_fingerprint_after_normalization_is_case_insensitive() {
        let partition = PartitionKey::new("entry");
        let a = fingerprint(&normalize("  Frontend Developer"), &partition);
        let b = fingerprint(&normalize("frontend developer  "), &partition);

        assert_eq!(a, b);
    }

    #[test]
    fn test_document_serde_round_trip() {
        let doc = Document::new(
            "doc-1",
            "Backend Engineer",
            PartitionKey::new("mid"),
            "payload",
            vec![1.0, 0.0],
        );

        let json = serde_json::to_string(&doc).unwrap();
        let restored: Document = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.id(), doc.id());
        assert_eq!(restored.embedding(), doc.embedding());
        assert_eq!(restored.created_at(), doc.created_at());
    }
}
