//! Similarity index implementations

mod in_memory;
mod json_file;
mod scan;

pub use in_memory::InMemoryIndex;
pub use json_file::JsonFileIndex;
