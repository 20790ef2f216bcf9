//! Similarity index trait and query result types

mod repository;

pub use repository::{ScoredDocument, SimilarityIndex};
