//! Model registry — the built-in catalog plus custom-model lookup.
//!
//! Built-in models are a static table; custom models come from the injected
//! settings store and use the same descriptor shape. Resolution checks the
//! built-in table first, so a custom entry can never shadow a shipped key.

use std::sync::Arc;

use designgen_core::settings::SettingsStore;
use designgen_core::types::{ModelDescriptor, ProviderId};

/// Model selected when the caller has no stored preference.
pub const DEFAULT_MODEL_KEY: &str = "gemini-2.0-flash-exp";

// ─────────────────────────────────────────────
// BuiltinModel — static catalog entry
// ─────────────────────────────────────────────

/// Static catalog entry for one shipped model.
#[derive(Clone, Copy, Debug)]
pub struct BuiltinModel {
    /// Stable caller-facing key.
    pub key: &'static str,
    /// Identifier sent to the backend.
    pub wire_id: &'static str,
    pub provider: ProviderId,
    /// Human-readable name for pickers.
    pub display_name: &'static str,
    pub description: &'static str,
    /// Larger/slower models some UIs gate behind an "advanced" toggle.
    pub advanced: bool,
}

impl BuiltinModel {
    /// Convert to the owned descriptor shape used at the API surface.
    pub fn descriptor(&self) -> ModelDescriptor {
        ModelDescriptor {
            key: self.key.to_string(),
            wire_id: self.wire_id.to_string(),
            provider: self.provider,
            display_name: self.display_name.to_string(),
            description: self.description.to_string(),
            advanced: self.advanced,
        }
    }
}

// ─────────────────────────────────────────────
// Built-in catalog (in picker order)
// ─────────────────────────────────────────────

/// All shipped models, grouped by provider in picker order.
pub static BUILTIN_MODELS: &[BuiltinModel] = &[
    // OpenAI
    BuiltinModel {
        key: "gpt-4o",
        wire_id: "gpt-4o",
        provider: ProviderId::OpenAi,
        display_name: "GPT-4o",
        description: "OpenAIの最新マルチモーダルモデル",
        advanced: false,
    },
    BuiltinModel {
        key: "gpt-4o-mini",
        wire_id: "gpt-4o-mini",
        provider: ProviderId::OpenAi,
        display_name: "GPT-4o Mini",
        description: "GPT-4oの軽量版。高速処理向き",
        advanced: false,
    },
    BuiltinModel {
        key: "gpt-3o-mini",
        wire_id: "gpt-3o-mini",
        provider: ProviderId::OpenAi,
        display_name: "GPT-3o Mini",
        description: "軽量で高速なGPT-3モデル",
        advanced: false,
    },
    // Anthropic
    BuiltinModel {
        key: "claude-3-5-sonnet",
        wire_id: "claude-3-5-sonnet-latest",
        provider: ProviderId::Anthropic,
        display_name: "Claude 3.5 Sonnet",
        description: "バランスの取れたClaude 3.5 Sonnet",
        advanced: false,
    },
    BuiltinModel {
        key: "claude-3-7-sonnet",
        wire_id: "claude-3-7-sonnet-latest",
        provider: ProviderId::Anthropic,
        display_name: "Claude 3.7 Sonnet",
        description: "最も知的なモデルClaude 3.7 Sonnet",
        advanced: false,
    },
    // Google
    BuiltinModel {
        key: "gemini-1.5-flash",
        wire_id: "gemini-1.5-flash",
        provider: ProviderId::Google,
        display_name: "Gemini 1.5 Flash",
        description: "バランスの取れたGeminiモデル",
        advanced: true,
    },
    BuiltinModel {
        key: "gemini-2.0-flash-lite",
        wire_id: "gemini-2.0-flash-lite",
        provider: ProviderId::Google,
        display_name: "Gemini 2.0 Flash-Lite",
        description: "最適化されたGeminiモデル",
        advanced: false,
    },
    BuiltinModel {
        key: "gemini-2.0-flash",
        wire_id: "gemini-2.0-flash",
        provider: ProviderId::Google,
        display_name: "Gemini 2.0 Flash",
        description: "最新のGeminiモデル",
        advanced: false,
    },
    BuiltinModel {
        key: "gemini-2.0-pro-exp",
        wire_id: "gemini-2.0-pro-exp-02-05",
        provider: ProviderId::Google,
        display_name: "Gemini 2.0 Pro (実験版)",
        description: "Gemini 2.0実験版",
        advanced: true,
    },
    BuiltinModel {
        key: "gemini-2.0-flash-exp",
        wire_id: "gemini-2.0-flash-exp",
        provider: ProviderId::Google,
        display_name: "Gemini 2.0 Flash (実験版)",
        description: "Gemini 2.0 Flash実験版",
        advanced: false,
    },
    // Ollama
    BuiltinModel {
        key: "llama3",
        wire_id: "llama3",
        provider: ProviderId::Ollama,
        display_name: "Llama 3",
        description: "Meta製のLlama 3モデル（ローカル実行）",
        advanced: false,
    },
    BuiltinModel {
        key: "mixtral",
        wire_id: "mixtral",
        provider: ProviderId::Ollama,
        display_name: "Mixtral 8x7B",
        description: "Mixtral 8x7B Instruct（ローカル実行）",
        advanced: false,
    },
    BuiltinModel {
        key: "codellama",
        wire_id: "codellama",
        provider: ProviderId::Ollama,
        display_name: "CodeLlama",
        description: "コード生成に特化したLlamaモデル（ローカル実行）",
        advanced: true,
    },
    // OpenRouter
    BuiltinModel {
        key: "openrouter-llama3",
        wire_id: "meta/llama-3-70b-instruct",
        provider: ProviderId::OpenRouter,
        display_name: "Llama 3 70B (OR)",
        description: "OpenRouter経由のLlama 3 70B",
        advanced: true,
    },
    BuiltinModel {
        key: "openrouter-claude-3",
        wire_id: "anthropic/claude-3-opus",
        provider: ProviderId::OpenRouter,
        display_name: "Claude 3 Opus (OR)",
        description: "OpenRouter経由のClaude 3 Opus",
        advanced: true,
    },
    BuiltinModel {
        key: "openrouter-mixtral",
        wire_id: "mistralai/mixtral-8x7b-instruct",
        provider: ProviderId::OpenRouter,
        display_name: "Mixtral 8x7B (OR)",
        description: "OpenRouter経由のMixtral",
        advanced: false,
    },
];

/// Look up a built-in model by key.
pub fn find_builtin(key: &str) -> Option<&'static BuiltinModel> {
    BUILTIN_MODELS.iter().find(|model| model.key == key)
}

// ─────────────────────────────────────────────
// ModelRegistry
// ─────────────────────────────────────────────

/// One provider's models, for grouped presentation.
#[derive(Clone, Debug)]
pub struct ModelGroup {
    pub provider: ProviderId,
    pub models: Vec<ModelDescriptor>,
}

/// Lookup over the built-in catalog merged with externally stored custom
/// models.
///
/// Read-only against the settings store; adding or removing custom models
/// belongs to the layer that owns persistence.
pub struct ModelRegistry {
    settings: Arc<dyn SettingsStore>,
}

impl ModelRegistry {
    pub fn new(settings: Arc<dyn SettingsStore>) -> Self {
        ModelRegistry { settings }
    }

    /// Resolve a model key to its descriptor. Checks built-ins first, then
    /// the custom table; `None` means the key is unknown to both.
    pub fn resolve(&self, key: &str) -> Option<ModelDescriptor> {
        if let Some(builtin) = find_builtin(key) {
            return Some(builtin.descriptor());
        }
        self.settings.custom_models().get(key).cloned()
    }

    /// All models grouped by provider, in [`ProviderId::ALL`] order.
    ///
    /// Within a group, built-ins keep catalog order and custom models follow
    /// sorted by key (the store hands them over as a hash map, so some fixed
    /// order has to be imposed). Providers with no models still get a group.
    pub fn list_all(&self) -> Vec<ModelGroup> {
        let mut customs: Vec<ModelDescriptor> =
            self.settings.custom_models().into_values().collect();
        customs.sort_by(|a, b| a.key.cmp(&b.key));

        ProviderId::ALL
            .iter()
            .map(|&provider| {
                let mut models: Vec<ModelDescriptor> = BUILTIN_MODELS
                    .iter()
                    .filter(|m| m.provider == provider)
                    .map(BuiltinModel::descriptor)
                    .collect();
                models.extend(customs.iter().filter(|m| m.provider == provider).cloned());
                ModelGroup { provider, models }
            })
            .collect()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use designgen_core::settings::MemorySettings;

    fn make_settings() -> Arc<MemorySettings> {
        Arc::new(MemorySettings::new())
    }

    // ── Built-in catalog ──

    #[test]
    fn test_builtin_count() {
        assert_eq!(BUILTIN_MODELS.len(), 16);
    }

    #[test]
    fn test_builtin_keys_unique() {
        let keys: Vec<&str> = BUILTIN_MODELS.iter().map(|m| m.key).collect();
        let mut unique = keys.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(keys.len(), unique.len(), "Duplicate model keys found");
    }

    #[test]
    fn test_builtin_group_sizes() {
        let count = |p: ProviderId| BUILTIN_MODELS.iter().filter(|m| m.provider == p).count();
        assert_eq!(count(ProviderId::OpenAi), 3);
        assert_eq!(count(ProviderId::Anthropic), 2);
        assert_eq!(count(ProviderId::Google), 5);
        assert_eq!(count(ProviderId::Ollama), 3);
        assert_eq!(count(ProviderId::OpenRouter), 3);
    }

    // ── resolve ──

    #[test]
    fn test_resolve_builtin() {
        let registry = ModelRegistry::new(make_settings());
        let desc = registry.resolve("gpt-4o").unwrap();
        assert_eq!(desc.provider, ProviderId::OpenAi);
        assert_eq!(desc.wire_id, "gpt-4o");
        assert_eq!(desc.display_name, "GPT-4o");
    }

    #[test]
    fn test_resolve_keeps_key_and_wire_id_distinct() {
        let registry = ModelRegistry::new(make_settings());
        assert_eq!(
            registry.resolve("claude-3-5-sonnet").unwrap().wire_id,
            "claude-3-5-sonnet-latest"
        );
        assert_eq!(
            registry.resolve("openrouter-llama3").unwrap().wire_id,
            "meta/llama-3-70b-instruct"
        );
    }

    #[test]
    fn test_every_builtin_resolves_to_its_provider() {
        let registry = ModelRegistry::new(make_settings());
        for model in BUILTIN_MODELS {
            let desc = registry.resolve(model.key).unwrap();
            assert_eq!(desc.provider, model.provider, "key {}", model.key);
        }
    }

    #[test]
    fn test_resolve_unknown_returns_none() {
        let registry = ModelRegistry::new(make_settings());
        assert!(registry.resolve("gpt-17-ultra").is_none());
        assert!(registry.resolve("").is_none());
    }

    #[test]
    fn test_resolve_custom_model() {
        let settings = make_settings();
        settings.add_custom_model(ModelDescriptor::new(
            "my-tuned-llama",
            "llama3:70b",
            ProviderId::Ollama,
            "My tuned Llama",
        ));
        let registry = ModelRegistry::new(settings);

        let desc = registry.resolve("my-tuned-llama").unwrap();
        assert_eq!(desc.provider, ProviderId::Ollama);
        assert_eq!(desc.wire_id, "llama3:70b");
    }

    #[test]
    fn test_builtin_shadows_custom_with_same_key() {
        let settings = make_settings();
        settings.add_custom_model(ModelDescriptor::new(
            "gpt-4o",
            "someone-elses-model",
            ProviderId::OpenRouter,
            "Imposter",
        ));
        let registry = ModelRegistry::new(settings);

        let desc = registry.resolve("gpt-4o").unwrap();
        assert_eq!(desc.provider, ProviderId::OpenAi);
        assert_eq!(desc.wire_id, "gpt-4o");
    }

    #[test]
    fn test_default_model_key_resolves() {
        let registry = ModelRegistry::new(make_settings());
        let desc = registry.resolve(DEFAULT_MODEL_KEY).unwrap();
        assert_eq!(desc.provider, ProviderId::Google);
        assert_eq!(desc.wire_id, "gemini-2.0-flash-exp");
    }

    // ── list_all ──

    #[test]
    fn test_list_all_group_order() {
        let registry = ModelRegistry::new(make_settings());
        let groups = registry.list_all();
        let order: Vec<ProviderId> = groups.iter().map(|g| g.provider).collect();
        assert_eq!(order, ProviderId::ALL);
    }

    #[test]
    fn test_list_all_covers_whole_catalog() {
        let registry = ModelRegistry::new(make_settings());
        let total: usize = registry.list_all().iter().map(|g| g.models.len()).sum();
        assert_eq!(total, BUILTIN_MODELS.len());
    }

    #[test]
    fn test_list_all_customs_after_builtins() {
        let settings = make_settings();
        settings.add_custom_model(ModelDescriptor::new(
            "aaa-proxy-gpt",
            "gpt-4o",
            ProviderId::OpenAi,
            "Proxy GPT",
        ));
        let registry = ModelRegistry::new(settings);

        let groups = registry.list_all();
        let openai = &groups[0];
        // Alphabetically first, but built-ins still lead the group.
        assert_eq!(openai.models.first().unwrap().key, "gpt-4o");
        assert_eq!(openai.models.last().unwrap().key, "aaa-proxy-gpt");
    }

    #[test]
    fn test_list_all_custom_order_is_sorted_by_key() {
        let settings = make_settings();
        settings.add_custom_model(ModelDescriptor::new(
            "zz-local",
            "z",
            ProviderId::Ollama,
            "Z",
        ));
        settings.add_custom_model(ModelDescriptor::new(
            "aa-local",
            "a",
            ProviderId::Ollama,
            "A",
        ));
        let registry = ModelRegistry::new(settings);

        let groups = registry.list_all();
        let ollama = groups
            .iter()
            .find(|g| g.provider == ProviderId::Ollama)
            .unwrap();
        let customs: Vec<&str> = ollama
            .models
            .iter()
            .skip(3) // past the built-ins
            .map(|m| m.key.as_str())
            .collect();
        assert_eq!(customs, ["aa-local", "zz-local"]);
    }
}
