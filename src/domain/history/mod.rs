//! Append-only history of generated content
//!
//! The history log is a presentation concern: an order-preserving
//! record of what was produced, with no read-path coupling to the
//! cache. An entry existing here implies nothing about cache state.

mod entry;

pub use entry::{HistoryEntry, HistoryLog, HISTORY_SCHEMA_VERSION};
