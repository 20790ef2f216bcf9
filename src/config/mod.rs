mod app_config;

pub use app_config::{AppConfig, HistoryConfig, IndexConfig, LogFormat, LoggingConfig};
