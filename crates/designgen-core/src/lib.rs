//! Core building blocks for Designgen — text-to-HTML generation via LLMs.
//!
//! Everything in this crate is pure: no HTTP, no storage, no async. The
//! provider crate layers the network on top.
//!
//! # Architecture
//!
//! - [`types`] — provider ids, model descriptors, request/result shapes
//! - [`error`] — the seven-kind error taxonomy + status classification
//! - [`prompt`] — style/final prompt assembly, shared system instruction
//! - [`normalize`] — HTML extraction from raw completions
//! - [`styles`] — the twelve built-in design styles
//! - [`settings`] — read-only access to credentials and custom models

pub mod error;
pub mod normalize;
pub mod prompt;
pub mod settings;
pub mod styles;
pub mod types;

// Re-export main types for convenience
pub use error::{classify_status, ErrorKind, ProviderError};
pub use normalize::extract_html;
pub use settings::{MemorySettings, SettingsStore};
pub use styles::{style_definition, style_keys, StyleDefinition, STYLE_DEFINITIONS};
pub use types::{
    GenerationRequest, GenerationResult, ModelDescriptor, ProviderId, TokenUsage,
};
