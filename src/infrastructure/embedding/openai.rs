//! OpenAI embedding provider implementation

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{DomainError, TextEmbedder};
use crate::infrastructure::http_client::HttpClientTrait;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Known OpenAI embedding models and their dimensions
const EMBEDDING_MODELS: &[(&str, usize)] = &[
    ("text-embedding-3-small", 1536),
    ("text-embedding-3-large", 3072),
    ("text-embedding-ada-002", 1536),
];

/// OpenAI embedding provider.
///
/// Bound to one model at construction time so every vector it produces
/// has the same dimensionality; the index relies on that.
#[derive(Debug)]
pub struct OpenAiEmbedder<C: HttpClientTrait> {
    client: C,
    auth_header: String,
    base_url: String,
    model: String,
    dimensions: usize,
}

impl<C: HttpClientTrait> OpenAiEmbedder<C> {
    /// Create a new embedder for a known model
    pub fn new(
        client: C,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::with_base_url(client, api_key, model, DEFAULT_OPENAI_BASE_URL)
    }

    /// Create a new embedder with a custom base URL
    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let model = model.into();
        let dimensions = EMBEDDING_MODELS
            .iter()
            .find(|(name, _)| *name == model)
            .map(|(_, dims)| *dims)
            .ok_or_else(|| {
                DomainError::configuration(format!("Unknown embedding model: {}", model))
            })?;

        let auth_header = format!("Bearer {}", api_key.into());
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            auth_header,
            base_url,
            model,
            dimensions,
        })
    }

    fn embeddings_url(&self) -> String {
        format!("{}/v1/embeddings", self.base_url)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<Vec<f32>, DomainError> {
        let response: OpenAiEmbeddingResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("openai", format!("Failed to parse embedding response: {}", e))
        })?;

        let vector = response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| DomainError::provider("openai", "No embedding in response"))?;

        if vector.len() != self.dimensions {
            return Err(DomainError::provider(
                "openai",
                format!(
                    "Embedding dimensionality mismatch: expected {}, got {}",
                    self.dimensions,
                    vector.len()
                ),
            ));
        }

        Ok(vector)
    }
}

#[async_trait]
impl<C: HttpClientTrait> TextEmbedder for OpenAiEmbedder<C> {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        let url = self.embeddings_url();
        let body = serde_json::json!({
            "model": self.model,
            "input": text,
        });

        let response = self.client.post_json(&url, self.headers(), &body).await?;

        self.parse_response(response)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

// OpenAI API types for embeddings

#[derive(Debug, Deserialize)]
struct OpenAiEmbeddingResponse {
    data: Vec<OpenAiEmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct OpenAiEmbeddingData {
    embedding: Vec<f32>,
}
