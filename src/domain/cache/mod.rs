//! Semantic cache configuration
//!
//! The cache matches semantically similar queries rather than requiring
//! exact key matches, so its central knob is the similarity threshold.

mod config;

pub use config::SemanticCacheConfig;
