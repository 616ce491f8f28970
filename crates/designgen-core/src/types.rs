//! Core types for Designgen — the model/request/result vocabulary shared by
//! every LLM backend.
//!
//! A generation call is a pure data flow: a [`GenerationRequest`] goes in, a
//! [`GenerationResult`] or a typed error comes out. Nothing in here touches
//! the network.

use serde::{Deserialize, Serialize};
use std::fmt;

// ─────────────────────────────────────────────
// Provider identity
// ─────────────────────────────────────────────

/// The five supported LLM backends.
///
/// Serialized in lowercase ("openai", "anthropic", ...) — the form model
/// descriptors and stored settings use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    OpenAi,
    Anthropic,
    Google,
    Ollama,
    OpenRouter,
}

impl ProviderId {
    /// All providers, in canonical display order.
    pub const ALL: [ProviderId; 5] = [
        ProviderId::OpenAi,
        ProviderId::Anthropic,
        ProviderId::Google,
        ProviderId::Ollama,
        ProviderId::OpenRouter,
    ];

    /// The lowercase identifier used in serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenAi => "openai",
            ProviderId::Anthropic => "anthropic",
            ProviderId::Google => "google",
            ProviderId::Ollama => "ollama",
            ProviderId::OpenRouter => "openrouter",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────
// Model descriptors
// ─────────────────────────────────────────────

/// A selectable model: the stable key callers use, the id sent on the wire,
/// and the backend that serves it.
///
/// Built-in models come from the static table in the registry; custom models
/// cross the settings boundary as JSON, hence the serde derives.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ModelDescriptor {
    /// Stable caller-facing key (e.g. "gpt-4o-mini", "openrouter-llama3").
    pub key: String,
    /// Identifier sent to the backend (e.g. "claude-3-5-sonnet-latest").
    pub wire_id: String,
    pub provider: ProviderId,
    /// Human-readable name for pickers.
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    /// Marks larger/slower models some UIs gate behind an "advanced" toggle.
    #[serde(default)]
    pub advanced: bool,
}

impl ModelDescriptor {
    /// Create a descriptor with an empty description and `advanced = false`.
    pub fn new(
        key: impl Into<String>,
        wire_id: impl Into<String>,
        provider: ProviderId,
        display_name: impl Into<String>,
    ) -> Self {
        ModelDescriptor {
            key: key.into(),
            wire_id: wire_id.into(),
            provider,
            display_name: display_name.into(),
            description: String::new(),
            advanced: false,
        }
    }
}

// ─────────────────────────────────────────────
// Generation request
// ─────────────────────────────────────────────

/// One HTML-generation call: the user's text plus the assembled style
/// instruction block.
///
/// A fresh request is built per call; providers never share mutable state
/// between calls.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    /// Raw user text to convert into a page.
    pub text: String,
    /// Model key as known to the registry (not the wire id).
    pub model_key: String,
    /// Assembled instruction block (style prompt or free-form override).
    /// May be empty; prompt assembly then emits only the content trailer.
    pub instructions: String,
    /// Sampling temperature, sent to every backend.
    pub temperature: f64,
    /// Completion budget. `None` means "let the backend decide" for backends
    /// where the field is optional; Anthropic substitutes its default.
    pub max_tokens: Option<u32>,
}

impl GenerationRequest {
    pub const DEFAULT_TEMPERATURE: f64 = 0.7;

    /// Create a request with default temperature, no token cap, and no
    /// instruction block.
    pub fn new(text: impl Into<String>, model_key: impl Into<String>) -> Self {
        GenerationRequest {
            text: text.into(),
            model_key: model_key.into(),
            instructions: String::new(),
            temperature: Self::DEFAULT_TEMPERATURE,
            max_tokens: None,
        }
    }

    /// Set the instruction block.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Cap the completion length.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

// ─────────────────────────────────────────────
// Generation result
// ─────────────────────────────────────────────

/// Successful output of a generation call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerationResult {
    /// Best-effort HTML extracted from the completion. When the completion
    /// carries no HTML markers this is the trimmed raw text unchanged.
    pub html_content: String,
    /// Model id the backend reported (or the requested wire id when the
    /// backend echoes nothing).
    pub wire_model_id: Option<String>,
    /// Why the model stopped, verbatim from the backend when given.
    pub finish_reason: Option<String>,
    pub usage: Option<TokenUsage>,
}

/// Normalized token accounting. Backends that only report an output count
/// (Ollama) set `input` to zero.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenUsage {
    pub input: u32,
    pub output: u32,
    pub total: u32,
}

impl TokenUsage {
    pub fn new(input: u32, output: u32) -> Self {
        TokenUsage {
            input,
            output,
            total: input + output,
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── ProviderId ──

    #[test]
    fn test_provider_id_serializes_lowercase() {
        assert_eq!(serde_json::to_value(ProviderId::OpenAi).unwrap(), "openai");
        assert_eq!(
            serde_json::to_value(ProviderId::OpenRouter).unwrap(),
            "openrouter"
        );
        assert_eq!(serde_json::to_value(ProviderId::Google).unwrap(), "google");
    }

    #[test]
    fn test_provider_id_deserializes_from_lowercase() {
        let id: ProviderId = serde_json::from_value(json!("anthropic")).unwrap();
        assert_eq!(id, ProviderId::Anthropic);

        let id: ProviderId = serde_json::from_value(json!("ollama")).unwrap();
        assert_eq!(id, ProviderId::Ollama);
    }

    #[test]
    fn test_provider_id_display_matches_as_str() {
        for id in ProviderId::ALL {
            assert_eq!(id.to_string(), id.as_str());
        }
    }

    #[test]
    fn test_provider_id_all_order() {
        let names: Vec<&str> = ProviderId::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(
            names,
            ["openai", "anthropic", "google", "ollama", "openrouter"]
        );
    }

    // ── ModelDescriptor ──

    #[test]
    fn test_model_descriptor_round_trip() {
        let desc = ModelDescriptor {
            key: "my-tuned-llama".to_string(),
            wire_id: "llama3:70b".to_string(),
            provider: ProviderId::Ollama,
            display_name: "My tuned Llama".to_string(),
            description: "Local fine-tune".to_string(),
            advanced: true,
        };

        let json_str = serde_json::to_string(&desc).unwrap();
        let back: ModelDescriptor = serde_json::from_str(&json_str).unwrap();

        assert_eq!(back, desc);
    }

    #[test]
    fn test_model_descriptor_optional_fields_default() {
        // Stored custom models may omit description/advanced.
        let json = json!({
            "key": "custom-1",
            "wire_id": "some/model",
            "provider": "openrouter",
            "display_name": "Custom"
        });
        let desc: ModelDescriptor = serde_json::from_value(json).unwrap();

        assert_eq!(desc.description, "");
        assert!(!desc.advanced);
        assert_eq!(desc.provider, ProviderId::OpenRouter);
    }

    // ── GenerationRequest ──

    #[test]
    fn test_request_defaults() {
        let req = GenerationRequest::new("hello", "gpt-4o-mini");

        assert_eq!(req.text, "hello");
        assert_eq!(req.model_key, "gpt-4o-mini");
        assert_eq!(req.instructions, "");
        assert_eq!(req.temperature, GenerationRequest::DEFAULT_TEMPERATURE);
        assert_eq!(req.max_tokens, None);
    }

    #[test]
    fn test_request_builder_chain() {
        let req = GenerationRequest::new("text", "claude-3-5-sonnet")
            .with_instructions("# style")
            .with_temperature(0.2)
            .with_max_tokens(2048);

        assert_eq!(req.instructions, "# style");
        assert_eq!(req.temperature, 0.2);
        assert_eq!(req.max_tokens, Some(2048));
    }

    // ── TokenUsage ──

    #[test]
    fn test_token_usage_totals() {
        let usage = TokenUsage::new(120, 456);
        assert_eq!(usage.total, 576);

        let output_only = TokenUsage::new(0, 88);
        assert_eq!(output_only.input, 0);
        assert_eq!(output_only.total, 88);
    }
}
