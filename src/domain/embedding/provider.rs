//! Embedding provider trait definition

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for text embedding providers.
///
/// Implementations must be deterministic: the same input always maps to
/// the same vector for a fixed model. Documents embedded by one model
/// are only comparable to queries embedded by the same model; switching
/// models invalidates every stored embedding.
#[async_trait]
pub trait TextEmbedder: Send + Sync + Debug {
    /// Map free text to a fixed-length vector
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError>;

    /// Fixed output dimensionality of this embedder
    fn dimensions(&self) -> usize;

    /// Model identifier, recorded for index compatibility checks
    fn model_name(&self) -> &str;
}
