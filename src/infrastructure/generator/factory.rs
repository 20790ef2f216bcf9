use std::sync::Arc;

use serde::Deserialize;

use super::{AnthropicBackend, OpenAiBackend};
use crate::domain::{CompletionBackend, DomainError};
use crate::infrastructure::http_client::HttpClient;

/// Completion backend selection and tuning.
///
/// One backend is chosen at construction time; there is exactly one
/// generation contract regardless of provider.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Provider name: "openai" or "anthropic"
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Model identifier passed to the provider
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Completion token budget
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1500
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Factory for creating completion backends
#[derive(Debug)]
pub struct BackendFactory;

impl BackendFactory {
    /// Create a backend from configuration and an API key
    pub fn create(
        config: &BackendConfig,
        api_key: impl Into<String>,
    ) -> Result<Arc<dyn CompletionBackend>, DomainError> {
        match config.provider.to_lowercase().as_str() {
            "openai" => Ok(Arc::new(
                OpenAiBackend::new(HttpClient::new(), api_key, &config.model)
                    .with_temperature(config.temperature)
                    .with_max_tokens(config.max_tokens),
            )),
            "anthropic" => Ok(Arc::new(
                AnthropicBackend::new(HttpClient::new(), api_key, &config.model)
                    .with_temperature(config.temperature)
                    .with_max_tokens(config.max_tokens),
            )),
            other => Err(DomainError::configuration(format!(
                "Unknown completion provider: {}",
                other
            ))),
        }
    }

    /// Create an OpenAI backend directly
    pub fn create_openai(
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Arc<dyn CompletionBackend> {
        Arc::new(OpenAiBackend::new(HttpClient::new(), api_key, model))
    }

    /// Create an Anthropic backend directly
    pub fn create_anthropic(
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Arc<dyn CompletionBackend> {
        Arc::new(AnthropicBackend::new(HttpClient::new(), api_key, model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_openai_backend() {
        let backend = BackendFactory::create_openai("test-key", "gpt-4o-mini");
        assert_eq!(backend.provider_name(), "openai");
    }

    #[test]
    fn test_create_anthropic_backend() {
        let backend = BackendFactory::create_anthropic("test-key", "claude-3-5-haiku-20241022");
        assert_eq!(backend.provider_name(), "anthropic");
    }

    #[test]
    fn test_create_from_config() {
        let config = BackendConfig {
            provider: "Anthropic".to_string(),
            model: "claude-3-5-haiku-20241022".to_string(),
            temperature: 0.5,
            max_tokens: 800,
        };

        let backend = BackendFactory::create(&config, "test-key").unwrap();
        assert_eq!(backend.provider_name(), "anthropic");
    }

    #[test]
    fn test_create_unknown_provider() {
        let config = BackendConfig {
            provider: "cohere".to_string(),
            ..BackendConfig::default()
        };

        let result = BackendFactory::create(&config, "test-key");
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_default_config() {
        let config = BackendConfig::default();

        assert_eq!(config.provider, "openai");
        assert_eq!(config.model, "gpt-4o-mini");
        assert!((config.temperature - 0.7).abs() < 0.001);
        assert_eq!(config.max_tokens, 1500);
    }
}
