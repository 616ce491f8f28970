//! The provider contract every generation backend implements.
//!
//! Five thin HTTP clients (OpenAI, Anthropic, Google, Ollama, OpenRouter)
//! share this trait; the factory hands callers a `Box<dyn LlmProvider>` so
//! the UI never has to know which backend serves a given model key.

use async_trait::async_trait;

use designgen_core::error::ProviderError;
use designgen_core::types::{GenerationRequest, GenerationResult, ProviderId};
use designgen_core::{prompt, styles};

/// Trait that all LLM providers must implement.
///
/// A provider is constructed per resolved model and holds no per-call state;
/// credentials are re-read from the settings store on every call, so a key
/// saved after construction is picked up by the next request.
#[async_trait]
pub trait LlmProvider: Send + Sync + std::fmt::Debug {
    /// Convert `request.text` into an HTML document.
    ///
    /// Exactly one network attempt per call — no internal retry. Every
    /// failure (missing credential, transport, backend-reported error,
    /// decode) surfaces as a [`ProviderError`].
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, ProviderError>;

    /// Whether a credential is currently configured for this backend.
    async fn is_available(&self) -> bool;

    /// The registry key this provider instance was created for.
    fn model_name(&self) -> &str;

    /// Which backend this provider talks to.
    fn provider_id(&self) -> ProviderId;

    /// Human-readable rendering of a style's resolved instructions.
    /// Display only — never sent to a backend.
    fn debug_prompt(&self, style_key: &str, instructions: &str) -> String {
        let style = styles::style_definition(style_key);
        prompt::build_debug_prompt(style.display_name, instructions)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Probe;

    #[async_trait]
    impl LlmProvider for Probe {
        async fn generate(
            &self,
            _request: &GenerationRequest,
        ) -> Result<GenerationResult, ProviderError> {
            Ok(GenerationResult::default())
        }

        async fn is_available(&self) -> bool {
            false
        }

        fn model_name(&self) -> &str {
            "probe"
        }

        fn provider_id(&self) -> ProviderId {
            ProviderId::Ollama
        }
    }

    #[test]
    fn test_debug_prompt_known_style() {
        let rendered = Probe.debug_prompt("magazine", "## スタイル指示\n雑誌風のレイアウトで");
        assert!(rendered.starts_with("スタイル: 雑誌風\n\n"));
        assert!(rendered.contains("雑誌風のレイアウトで"));
    }

    #[test]
    fn test_debug_prompt_unknown_style_falls_back_to_standard() {
        let rendered = Probe.debug_prompt("no-such-style", "whatever");
        assert!(rendered.starts_with("スタイル: 標準\n\n"));
    }

    #[test]
    fn test_debug_prompt_empty_instructions_uses_placeholder() {
        let rendered = Probe.debug_prompt("standard", "");
        assert!(rendered.contains("カスタムプロンプトが設定されていません"));
    }
}
