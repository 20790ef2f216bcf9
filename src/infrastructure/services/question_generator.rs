//! Question generation adapter
//!
//! Wraps the completion backend behind the single contract the rest of
//! the system sees: role text and partition in, generated Q&A text
//! out. The partition steers the prompt through its level profile.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    CompletionBackend, DomainError, LevelCatalog, PartitionKey, PromptTemplate,
};

/// Default prompt for interview Q&A generation
const DEFAULT_PROMPT: &str = "\
You are an expert technical recruiter preparing a ${var:level} interview.

Generate ${var:count:5} technical interview questions with ideal answers \
for the role of: ${var:role}

Difficulty: ${var:difficulty}
Expected answer depth: ${var:depth}

Format:
Q1: ...
A1: ...
Q2: ...
A2: ...";

/// Generator adapter over a swappable completion backend
#[derive(Debug)]
pub struct QuestionGenerator {
    backend: Arc<dyn CompletionBackend>,
    catalog: LevelCatalog,
    template: PromptTemplate,
}

impl QuestionGenerator {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            backend,
            catalog: LevelCatalog::default(),
            template: PromptTemplate::parse(DEFAULT_PROMPT),
        }
    }

    /// Replace the level catalog
    pub fn with_catalog(mut self, catalog: LevelCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the prompt template; it may reference the variables
    /// `role`, `level`, `difficulty`, `depth` and `count`
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// Generate Q&A content for a role at the given level.
    ///
    /// Backend failures surface unchanged; there are no retries here.
    /// An empty completion is an error: the caller must never cache or
    /// display a blank result.
    pub async fn generate(
        &self,
        query_text: &str,
        partition: &PartitionKey,
    ) -> Result<String, DomainError> {
        let profile = self.catalog.resolve(partition);

        let mut values = HashMap::new();
        values.insert("role".to_string(), query_text.to_string());
        values.insert("level".to_string(), profile.display_name().to_string());
        values.insert(
            "difficulty".to_string(),
            profile.difficulty_guidance().to_string(),
        );
        values.insert("depth".to_string(), profile.depth_guidance().to_string());

        let prompt = self
            .template
            .render(&values)
            .map_err(|e| DomainError::internal(format!("Failed to render prompt: {}", e)))?;

        debug!(
            "Generating content for partition {} via {}",
            partition,
            self.backend.provider_name()
        );

        let completion = self.backend.complete(&prompt).await?;

        if completion.trim().is_empty() {
            return Err(DomainError::provider(
                self.backend.provider_name(),
                "Backend returned an empty completion",
            ));
        }

        Ok(completion)
    }
}
