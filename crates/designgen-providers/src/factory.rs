//! Provider construction from a model key.

use std::sync::Arc;

use tracing::debug;

use designgen_core::error::{ErrorKind, ProviderError};
use designgen_core::settings::SettingsStore;
use designgen_core::types::ProviderId;

use crate::anthropic::AnthropicProvider;
use crate::google::GoogleProvider;
use crate::ollama::OllamaProvider;
use crate::openai::OpenAiProvider;
use crate::openrouter::OpenRouterProvider;
use crate::registry::ModelRegistry;
use crate::traits::LlmProvider;

/// Resolve a model key and build the client for its backend.
///
/// Custom models dispatch on their declared provider, so a custom entry
/// pointing at OpenAI gets a regular OpenAI client with its own wire id.
pub fn create_provider(
    model_key: &str,
    settings: Arc<dyn SettingsStore>,
) -> Result<Box<dyn LlmProvider>, ProviderError> {
    let registry = ModelRegistry::new(settings.clone());
    let descriptor = registry.resolve(model_key).ok_or_else(|| {
        ProviderError::new(
            ErrorKind::InvalidRequest,
            format!("Unknown model key: {}", model_key),
        )
    })?;

    debug!(
        model = %descriptor.key,
        provider = %descriptor.provider,
        wire_id = %descriptor.wire_id,
        "Creating provider"
    );

    Ok(match descriptor.provider {
        ProviderId::OpenAi => Box::new(OpenAiProvider::new(&descriptor, settings)),
        ProviderId::Anthropic => Box::new(AnthropicProvider::new(&descriptor, settings)),
        ProviderId::Google => Box::new(GoogleProvider::new(&descriptor, settings)),
        ProviderId::Ollama => Box::new(OllamaProvider::new(&descriptor, settings)),
        ProviderId::OpenRouter => Box::new(OpenRouterProvider::new(&descriptor, settings)),
    })
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DEFAULT_MODEL_KEY;
    use designgen_core::settings::MemorySettings;
    use designgen_core::types::ModelDescriptor;

    #[test]
    fn test_create_provider_dispatches_each_backend() {
        let settings = Arc::new(MemorySettings::new());
        let cases: &[(&str, ProviderId)] = &[
            ("gpt-4o", ProviderId::OpenAi),
            ("claude-3-5-sonnet", ProviderId::Anthropic),
            ("gemini-2.0-flash", ProviderId::Google),
            ("llama3", ProviderId::Ollama),
            ("openrouter-mixtral", ProviderId::OpenRouter),
        ];

        for (key, expected) in cases {
            let provider = create_provider(key, settings.clone()).unwrap();
            assert_eq!(provider.provider_id(), *expected, "key {}", key);
            assert_eq!(provider.model_name(), *key);
        }
    }

    #[test]
    fn test_create_provider_default_model_is_google() {
        let settings = Arc::new(MemorySettings::new());
        let provider = create_provider(DEFAULT_MODEL_KEY, settings).unwrap();

        assert_eq!(provider.provider_id(), ProviderId::Google);
    }

    #[test]
    fn test_create_provider_unknown_key() {
        let settings = Arc::new(MemorySettings::new());
        let err = create_provider("no-such-model", settings).unwrap_err();

        assert_eq!(err.kind, ErrorKind::InvalidRequest);
        assert_eq!(err.provider, None);
        assert!(err.message.contains("no-such-model"));
    }

    #[test]
    fn test_create_provider_resolves_custom_models() {
        let settings = Arc::new(MemorySettings::new());
        settings.add_custom_model(ModelDescriptor::new(
            "corp-proxy-gpt",
            "gpt-4o",
            ProviderId::OpenAi,
            "Corp proxy GPT",
        ));

        let provider = create_provider("corp-proxy-gpt", settings).unwrap();

        assert_eq!(provider.provider_id(), ProviderId::OpenAi);
        assert_eq!(provider.model_name(), "corp-proxy-gpt");
    }
}
