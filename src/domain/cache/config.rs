//! Semantic cache configuration

use serde::{Deserialize, Serialize};

/// Configuration for the semantic cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticCacheConfig {
    /// Minimum cosine similarity for a cache hit (0.0 to 1.0).
    ///
    /// Higher values require closer queries: raising it trades
    /// regeneration cost for a lower risk of returning content written
    /// for a meaningfully different role.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f32,

    /// Embedding model used for both stored documents and queries
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,
}

fn default_similarity_threshold() -> f32 {
    0.8
}

fn default_embedding_model() -> String {
    "text-embedding-3-small".to_string()
}

impl Default for SemanticCacheConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            embedding_model: default_embedding_model(),
        }
    }
}

impl SemanticCacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the similarity threshold, clamped to [0.0, 1.0]
    pub fn with_similarity_threshold(mut self, threshold: f32) -> Self {
        self.similarity_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Set the embedding model
    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = model.into();
        self
    }

    /// Maximum cosine distance that still counts as a hit
    pub fn distance_cutoff(&self) -> f32 {
        1.0 - self.similarity_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SemanticCacheConfig::default();

        assert!((config.similarity_threshold - 0.8).abs() < 0.001);
        assert_eq!(config.embedding_model, "text-embedding-3-small");
    }

    #[test]
    fn test_config_builder() {
        let config = SemanticCacheConfig::new()
            .with_similarity_threshold(0.9)
            .with_embedding_model("custom-model");

        assert!((config.similarity_threshold - 0.9).abs() < 0.001);
        assert_eq!(config.embedding_model, "custom-model");
    }

    #[test]
    fn test_similarity_threshold_clamped() {
        let config = SemanticCacheConfig::new().with_similarity_threshold(1.5);
        assert!((config.similarity_threshold - 1.0).abs() < 0.001);

        let config = SemanticCacheConfig::new().with_similarity_threshold(-0.5);
        assert!(config.similarity_threshold.abs() < 0.001);
    }

    #[test]
    fn test_distance_cutoff() {
        let config = SemanticCacheConfig::new().with_similarity_threshold(0.8);

        assert_eq!(config.distance_cutoff(), 1.0 - 0.8);
    }
}
