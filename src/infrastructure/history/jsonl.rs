//! Append-only JSONL history log
//!
//! One JSON object per line, appended in order. Older lines written
//! before the entry schema was versioned are migrated to the current
//! shape at load time; a malformed line is skipped with a warning
//! rather than poisoning the whole log.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;

use crate::domain::{DomainError, HistoryEntry, HistoryLog, PartitionKey};

/// Partition recorded for legacy entries that predate partitioning
const LEGACY_PARTITION: &str = "general";

/// File-backed append-only history log
#[derive(Debug)]
pub struct JsonlHistoryLog {
    path: PathBuf,
}

impl JsonlHistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

/// A line as found on disk: current shape, or the pre-versioning one
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordedLine {
    Current(HistoryEntry),
    Legacy(LegacyRecord),
}

/// Pre-versioning entry shape: `content` instead of `payload`, no
/// partition, unix-seconds timestamp
#[derive(Debug, Deserialize)]
struct LegacyRecord {
    query: String,
    content: String,
    level: Option<String>,
    timestamp: Option<i64>,
}

impl LegacyRecord {
    fn migrate(self) -> HistoryEntry {
        let partition = self
            .level
            .map(PartitionKey::new)
            .unwrap_or_else(|| PartitionKey::new(LEGACY_PARTITION));

        let created_at = self
            .timestamp
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

        HistoryEntry::migrated(self.query, partition, self.content, created_at)
    }
}

#[async_trait]
impl HistoryLog for JsonlHistoryLog {
    async fn append(&self, entry: HistoryEntry) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    DomainError::storage(format!(
                        "Failed to create history directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let line = serde_json::to_string(&entry)
            .map_err(|e| DomainError::storage(format!("Failed to serialize history entry: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to open history file {}: {}",
                    self.path.display(),
                    e
                ))
            })?;

        writeln!(file, "{}", line).map_err(|e| {
            DomainError::storage(format!(
                "Failed to append to history file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }

    async fn entries(&self) -> Result<Vec<HistoryEntry>, DomainError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            DomainError::storage(format!(
                "Failed to read history file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let mut entries = Vec::new();

        for (number, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<RecordedLine>(line) {
                Ok(RecordedLine::Current(entry)) => entries.push(entry),
                Ok(RecordedLine::Legacy(record)) => entries.push(record.migrate()),
                Err(e) => {
                    warn!(
                        "Skipping malformed history line {} in {}: {}",
                        number + 1,
                        self.path.display(),
                        e
                    );
                }
            }
        }

        Ok(entries)
    }
}
