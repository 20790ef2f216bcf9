//! Completion backend trait definition

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for text completion backends (OpenAI, Anthropic, etc.).
///
/// The contract is deliberately narrow: prompt in, text out. Auth,
/// rate-limit, network and malformed-response failures all surface as
/// `DomainError::Provider` with the underlying cause in the message.
/// No retries happen at this boundary.
#[async_trait]
pub trait CompletionBackend: Send + Sync + Debug {
    /// Send a prompt and return the raw completion text
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug)]
    pub struct MockBackend {
        response: Option<String>,
        error: Option<String>,
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self {
                response: None,
                error: None,
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn with_response(mut self, response: impl Into<String>) -> Self {
            self.response = Some(response.into());
            self
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        /// Number of completed `complete` calls so far
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::Relaxed)
        }

        /// Prompts received, in call order
        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    impl Default for MockBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl CompletionBackend for MockBackend {
        async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            self.prompts.lock().unwrap().push(prompt.to_string());

            if let Some(ref error) = self.error {
                return Err(DomainError::provider("mock", error));
            }

            self.response
                .clone()
                .ok_or_else(|| DomainError::provider("mock", "No mock response configured"))
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }
}
