//! Completion backend implementations

mod anthropic;
mod factory;
mod openai;

pub use anthropic::AnthropicBackend;
pub use factory::{BackendConfig, BackendFactory};
pub use openai::OpenAiBackend;
