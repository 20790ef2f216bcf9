//! Application services

mod qa_service;
mod question_generator;
mod semantic_cache;

pub use qa_service::{QaOutcome, QaService};
pub use question_generator::QuestionGenerator;
pub use semantic_cache::SemanticCacheService;
