//! History log implementations

mod jsonl;

pub use jsonl::JsonlHistoryLog;
