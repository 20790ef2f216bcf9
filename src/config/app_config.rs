use serde::Deserialize;

use crate::domain::SemanticCacheConfig;
use crate::infrastructure::generator::BackendConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub cache: SemanticCacheConfig,
    #[serde(default)]
    pub generator: BackendConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Similarity index storage selection
#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    /// Index backend: "file" (durable) or "memory" (ephemeral)
    pub backend: String,
    /// Snapshot path for the file backend
    pub path: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            backend: "file".to_string(),
            path: "data/index.json".to_string(),
        }
    }
}

/// History log location
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    pub path: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: "data/history.jsonl".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("PREPFORGE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
