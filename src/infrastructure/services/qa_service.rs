//! Lookup-or-generate orchestration
//!
//! The single public entry point composes the semantic cache and the
//! question generator: return a cached equivalent when one exists,
//! otherwise generate, commit best-effort, and return the fresh
//! content. Generation availability always wins over cache health —
//! a failing index degrades to regeneration, never to a failed
//! request.

use tracing::warn;

use super::question_generator::QuestionGenerator;
use super::semantic_cache::SemanticCacheService;
use crate::domain::{DomainError, PartitionKey};

/// Result of a lookup-or-generate call
#[derive(Debug, Clone)]
pub struct QaOutcome {
    /// The generated or cached content
    pub payload: String,
    /// Whether the payload came from the cache
    pub from_cache: bool,
}

/// Orchestrator for cached interview Q&A generation
#[derive(Debug)]
pub struct QaService {
    cache: SemanticCacheService,
    generator: QuestionGenerator,
}

impl QaService {
    pub fn new(cache: SemanticCacheService, generator: QuestionGenerator) -> Self {
        Self { cache, generator }
    }

    pub fn cache(&self) -> &SemanticCacheService {
        &self.cache
    }

    /// Return cached content for a semantically equivalent query, or
    /// generate, commit and return fresh content.
    ///
    /// Validation errors (empty query) propagate before any generation
    /// or storage work. A failed cache lookup is downgraded to a miss;
    /// a failed commit is logged and the generated payload is still
    /// returned.
    pub async fn generate_or_retrieve(
        &self,
        query_text: &str,
        partition: &PartitionKey,
    ) -> Result<QaOutcome, DomainError> {
        let cached = match self.cache.lookup(query_text, partition).await {
            Ok(hit) => hit,
            Err(e @ DomainError::Validation { .. }) => return Err(e),
            Err(e) => {
                warn!("Cache lookup failed, treating as miss: {}", e);
                None
            }
        };

        if let Some(document) = cached {
            return Ok(QaOutcome {
                payload: document.payload().to_string(),
                from_cache: true,
            });
        }

        let payload = self.generator.generate(query_text, partition).await?;

        if let Err(e) = self.cache.commit(query_text, partition, &payload).await {
            warn!("Failed to cache generated content: {}", e);
        }

        Ok(QaOutcome {
            payload,
            from_cache: false,
        })
    }

    /// Administratively remove the cached document for a query
    pub async fn forget(
        &self,
        query_text: &str,
        partition: &PartitionKey,
    ) -> Result<bool, DomainError> {
        self.cache.remove(query_text, partition).await
    }
}
