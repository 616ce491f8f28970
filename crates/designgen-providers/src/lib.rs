//! HTTP clients for the five Designgen generation backends.
//!
//! # Architecture
//!
//! - [`traits::LlmProvider`] — trait that all backends implement
//! - [`registry`] — built-in model catalog + custom-model resolution
//! - [`factory::create_provider`] — builds the right client from a model key
//! - [`http`] — shared reqwest plumbing and API error mapping
//! - one module per backend: [`openai`], [`anthropic`], [`google`],
//!   [`ollama`], [`openrouter`]

pub mod anthropic;
pub mod factory;
pub mod google;
pub mod http;
pub mod ollama;
pub mod openai;
pub mod openrouter;
pub mod registry;
pub mod traits;

// Re-export main types for convenience
pub use anthropic::AnthropicProvider;
pub use factory::create_provider;
pub use google::GoogleProvider;
pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;
pub use openrouter::OpenRouterProvider;
pub use registry::{ModelGroup, ModelRegistry, BUILTIN_MODELS, DEFAULT_MODEL_KEY};
pub use traits::LlmProvider;
