//! Settings access — the seam between this core and whatever owns
//! credentials and custom-model registrations (browser storage, a config
//! file, a test fixture).
//!
//! The core only ever reads. Providers re-read the credential on every call
//! so a key changed mid-session takes effect without rebuilding anything.

use crate::types::{ModelDescriptor, ProviderId};
use std::collections::HashMap;
use std::sync::RwLock;

/// Read-only view of stored settings.
///
/// Implementations must be cheap to call: `credential` runs once per
/// generation request.
pub trait SettingsStore: Send + Sync {
    /// API key (or equivalent credential) for a backend.
    /// Empty string when unset — never an error.
    fn credential(&self, provider: ProviderId) -> String;

    /// User-registered models, keyed by model key. Empty map when none.
    fn custom_models(&self) -> HashMap<String, ModelDescriptor>;
}

// ─────────────────────────────────────────────
// MemorySettings
// ─────────────────────────────────────────────

/// In-memory [`SettingsStore`] for embedders and tests.
///
/// Thread-safe via `RwLock` — multiple readers, exclusive writer.
#[derive(Debug, Default)]
pub struct MemorySettings {
    credentials: RwLock<HashMap<ProviderId, String>>,
    custom_models: RwLock<HashMap<String, ModelDescriptor>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or overwrite) a backend credential.
    pub fn set_credential(&self, provider: ProviderId, key: impl Into<String>) {
        let mut credentials = self.credentials.write().unwrap();
        credentials.insert(provider, key.into());
    }

    /// Remove a backend credential. Subsequent reads return the empty string.
    pub fn remove_credential(&self, provider: ProviderId) {
        let mut credentials = self.credentials.write().unwrap();
        credentials.remove(&provider);
    }

    /// Register a custom model under its own key.
    pub fn add_custom_model(&self, model: ModelDescriptor) {
        let mut models = self.custom_models.write().unwrap();
        models.insert(model.key.clone(), model);
    }

    /// Remove a custom model registration.
    pub fn remove_custom_model(&self, key: &str) {
        let mut models = self.custom_models.write().unwrap();
        models.remove(key);
    }
}

impl SettingsStore for MemorySettings {
    fn credential(&self, provider: ProviderId) -> String {
        let credentials = self.credentials.read().unwrap();
        credentials.get(&provider).cloned().unwrap_or_default()
    }

    fn custom_models(&self) -> HashMap<String, ModelDescriptor> {
        let models = self.custom_models.read().unwrap();
        models.clone()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
