//! History entry and log trait

use std::fmt::Debug;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::partition::PartitionKey;
use crate::domain::DomainError;

/// Current on-disk schema version for history entries
pub const HISTORY_SCHEMA_VERSION: u32 = 2;

/// One recorded generation, kept for display.
///
/// Entries are versioned so older on-disk shapes can be migrated at
/// load time instead of being branched on at every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Schema version this entry was written with
    schema_version: u32,
    /// Original query text
    query_text: String,
    /// Partition the content was generated for
    partition_key: PartitionKey,
    /// The generated content
    payload: String,
    /// When the entry was recorded
    created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create a new entry at the current schema version, stamped now
    pub fn new(
        query_text: impl Into<String>,
        partition_key: PartitionKey,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            schema_version: HISTORY_SCHEMA_VERSION,
            query_text: query_text.into(),
            partition_key,
            payload: payload.into(),
            created_at: Utc::now(),
        }
    }

    /// Reconstruct an entry from migrated legacy fields
    pub fn migrated(
        query_text: impl Into<String>,
        partition_key: PartitionKey,
        payload: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            schema_version: HISTORY_SCHEMA_VERSION,
            query_text: query_text.into(),
            partition_key,
            payload: payload.into(),
            created_at,
        }
    }

    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn partition_key(&self) -> &PartitionKey {
        &self.partition_key
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Trait for append-only history logs
#[async_trait]
pub trait HistoryLog: Send + Sync + Debug {
    /// Append an entry; order of appends is preserved
    async fn append(&self, entry: HistoryEntry) -> Result<(), DomainError>;

    /// All entries in append order
    async fn entries(&self) -> Result<Vec<HistoryEntry>, DomainError>;
}
