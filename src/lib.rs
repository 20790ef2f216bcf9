//! Prepforge
//!
//! Interview Q&A generation with a semantic similarity cache. A query
//! (job role or description) plus an interview level either hits a
//! previously generated document — matched by embedding similarity
//! within that level — or is generated fresh through a completion
//! backend and committed for future reuse.

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use config::IndexConfig;
use domain::{CompletionBackend, DomainError, HistoryLog, SimilarityIndex, TextEmbedder};
use infrastructure::embedding::OpenAiEmbedder;
use infrastructure::generator::{BackendConfig, BackendFactory};
use infrastructure::history::JsonlHistoryLog;
use infrastructure::http_client::HttpClient;
use infrastructure::index::{InMemoryIndex, JsonFileIndex};
use infrastructure::services::{QaService, QuestionGenerator, SemanticCacheService};
use tracing::info;

/// Wire up the full lookup-or-generate service from configuration
pub fn create_qa_service(config: &AppConfig) -> anyhow::Result<QaService> {
    let index = create_index(&config.index)?;
    let embedder = create_embedder(&config.cache.embedding_model)?;

    let cache = SemanticCacheService::with_config(index, embedder, config.cache.clone());
    let generator = QuestionGenerator::new(create_backend(&config.generator)?);

    Ok(QaService::new(cache, generator))
}

/// Open the history log at its configured location
pub fn create_history_log(config: &AppConfig) -> Arc<dyn HistoryLog> {
    Arc::new(JsonlHistoryLog::new(&config.history.path))
}

fn create_index(config: &IndexConfig) -> anyhow::Result<Arc<dyn SimilarityIndex>> {
    match config.backend.to_lowercase().as_str() {
        "memory" => {
            info!("Using in-memory similarity index");
            Ok(Arc::new(InMemoryIndex::new()))
        }
        "file" => {
            info!("Using file-backed similarity index at {}", config.path);
            Ok(Arc::new(JsonFileIndex::open(&config.path)?))
        }
        other => Err(DomainError::configuration(format!(
            "Unknown index backend: {}",
            other
        ))
        .into()),
    }
}

fn create_embedder(model: &str) -> anyhow::Result<Arc<dyn TextEmbedder>> {
    let api_key = std::env::var("OPENAI_API_KEY")
        .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY environment variable is required"))?;

    Ok(Arc::new(OpenAiEmbedder::new(
        HttpClient::new(),
        api_key,
        model,
    )?))
}

fn create_backend(config: &BackendConfig) -> anyhow::Result<Arc<dyn CompletionBackend>> {
    let key_var = match config.provider.to_lowercase().as_str() {
        "anthropic" => "ANTHROPIC_API_KEY",
        _ => "OPENAI_API_KEY",
    };

    let api_key = std::env::var(key_var)
        .map_err(|_| anyhow::anyhow!("{} environment variable is required", key_var))?;

    Ok(BackendFactory::create(config, api_key)?)
}
