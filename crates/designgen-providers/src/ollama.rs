//! Ollama local-generate client.
//!
//! Talks to a local (or self-hosted) Ollama server. Unlike the hosted
//! backends there is no fail-fast on a missing credential — local servers
//! accept unauthenticated requests — but when a key is stored it is sent
//! as a Bearer token for reverse-proxied setups.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use designgen_core::error::{classify_status, ErrorKind, ProviderError};
use designgen_core::normalize::extract_html;
use designgen_core::prompt;
use designgen_core::settings::SettingsStore;
use designgen_core::types::{
    GenerationRequest, GenerationResult, ModelDescriptor, ProviderId, TokenUsage,
};

use crate::http;
use crate::traits::LlmProvider;

const ENDPOINT: &str = "http://localhost:11434/api/generate";
const API_ERROR: &str = "Ollama API error";

// ─────────────────────────────────────────────
// Wire format
// ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateApiRequest {
    model: String,
    prompt: String,
    stream: bool,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateApiResponse {
    #[serde(default)]
    response: String,
    #[serde(default)]
    eval_count: Option<u32>,
}

// ─────────────────────────────────────────────
// Provider
// ─────────────────────────────────────────────

/// Client for the Ollama generate API.
pub struct OllamaProvider {
    client: reqwest::Client,
    endpoint: String,
    model_key: String,
    wire_model_id: String,
    settings: Arc<dyn SettingsStore>,
}

impl std::fmt::Debug for OllamaProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OllamaProvider")
            .field("endpoint", &self.endpoint)
            .field("model_key", &self.model_key)
            .field("wire_model_id", &self.wire_model_id)
            .finish()
    }
}

impl OllamaProvider {
    /// Create a client for a resolved model.
    pub fn new(descriptor: &ModelDescriptor, settings: Arc<dyn SettingsStore>) -> Self {
        OllamaProvider {
            client: http::build_client(http::DEFAULT_TIMEOUT),
            endpoint: ENDPOINT.to_string(),
            model_key: descriptor.key.clone(),
            wire_model_id: descriptor.wire_id.clone(),
            settings,
        }
    }

    /// Point the client at a non-default server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replace the transport deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = http::build_client(timeout);
        self
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, ProviderError> {
        let api_key = self.settings.credential(ProviderId::Ollama);
        if api_key.trim().is_empty() {
            warn!("Ollama API key is not configured; assuming a local unauthenticated server");
        }

        let final_prompt = prompt::build_final_prompt(&request.text, &request.instructions);
        // The generate API takes a single prompt string; most models
        // understand this system/user delimiter convention.
        let prompt_with_system = format!(
            "<|system|>\n{}\n<|user|>\n{}",
            prompt::SYSTEM_INSTRUCTION,
            final_prompt
        );

        let body = GenerateApiRequest {
            model: self.wire_model_id.clone(),
            prompt: prompt_with_system,
            stream: false,
            temperature: request.temperature,
        };

        debug!(
            provider = %ProviderId::Ollama,
            model = %self.wire_model_id,
            temperature = request.temperature,
            "Calling LLM"
        );

        let mut call = self.client.post(&self.endpoint).json(&body);
        if !api_key.trim().is_empty() {
            call = call.bearer_auth(&api_key);
        }

        let response = call
            .send()
            .await
            .map_err(|e| http::transport_error(ProviderId::Ollama, e))?;

        let status = response.status();
        if !status.is_success() {
            let code = status.as_u16();
            let body = response.text().await.unwrap_or_default();
            error!(provider = %ProviderId::Ollama, status = code, body = %body, "API error");
            // A 404 from Ollama means the model has not been pulled.
            let kind = if code == 404 {
                ErrorKind::InvalidRequest
            } else {
                classify_status(code, &body)
            };
            let message = http::error_message(&body)
                .unwrap_or_else(|| format!("{}: {}", API_ERROR, status));
            return Err(ProviderError::for_provider(ProviderId::Ollama, kind, message));
        }

        let data: GenerateApiResponse = response.json().await.map_err(|e| {
            ProviderError::for_provider(ProviderId::Ollama, ErrorKind::Unknown, e.to_string())
        })?;

        // Ollama reports no prompt token count.
        let usage = match data.eval_count {
            Some(count) if count > 0 => Some(TokenUsage {
                input: 0,
                output: count,
                total: count,
            }),
            _ => None,
        };

        Ok(GenerationResult {
            html_content: extract_html(&data.response),
            wire_model_id: Some(self.wire_model_id.clone()),
            finish_reason: None,
            usage,
        })
    }

    async fn is_available(&self) -> bool {
        !self.settings.credential(ProviderId::Ollama).is_empty()
    }

    fn model_name(&self) -> &str {
        &self.model_key
    }

    fn provider_id(&self) -> ProviderId {
        ProviderId::Ollama
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
