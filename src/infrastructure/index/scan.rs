//! Linear nearest-neighbor scan shared by the index implementations

use std::collections::HashMap;

use crate::domain::{cosine_distance, Document, PartitionKey, ScoredDocument};

/// Up to `k` nearest documents within `partition`, ascending distance.
///
/// The partition filter runs before any distance computation; vectors
/// from other partitions are never compared against the query.
pub(super) fn nearest_in_partition(
    documents: &HashMap<String, Document>,
    embedding: &[f32],
    partition: &PartitionKey,
    k: usize,
) -> Vec<ScoredDocument> {
    let mut results: Vec<ScoredDocument> = documents
        .values()
        .filter(|doc| doc.partition_key() == partition)
        .map(|doc| ScoredDocument::new(doc.clone(), cosine_distance(embedding, doc.embedding())))
        .collect();

    results.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results.truncate(k);
    results
}
