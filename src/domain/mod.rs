//! Domain layer - Core entities, traits and errors

pub mod cache;
pub mod document;
pub mod embedding;
pub mod error;
pub mod generator;
pub mod history;
pub mod index;
pub mod partition;
pub mod prompt;

pub use cache::SemanticCacheConfig;
pub use document::{fingerprint, normalize, Document};
pub use embedding::{cosine_distance, cosine_similarity, TextEmbedder};
pub use error::DomainError;
pub use generator::{CompletionBackend, LevelCatalog, LevelProfile};
pub use history::{HistoryEntry, HistoryLog, HISTORY_SCHEMA_VERSION};
pub use index::{ScoredDocument, SimilarityIndex};
pub use partition::PartitionKey;
pub use prompt::{PromptTemplate, PromptVariable, TemplateError};
