//! Partition keys segment the cache into independent similarity spaces

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorical key (e.g. interview level) that segments the cache.
///
/// Two documents stored under different partition keys are never
/// compared for similarity, even when their query texts are identical.
/// Any string is a valid key; an unrecognized key simply names an empty
/// partition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartitionKey(String);

impl PartitionKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PartitionKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for PartitionKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}
