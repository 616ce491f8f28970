//! Anthropic messages-API client.
//!
//! Differs from the chat-completions family in three ways: the credential
//! travels in an `X-API-Key` header next to a required version header, the
//! system instruction is a top-level field rather than a message, and
//! `max_tokens` is mandatory — absent a caller value we substitute a
//! generous default.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use designgen_core::error::{ErrorKind, ProviderError};
use designgen_core::normalize::extract_html;
use designgen_core::prompt;
use designgen_core::settings::SettingsStore;
use designgen_core::types::{
    GenerationRequest, GenerationResult, ModelDescriptor, ProviderId, TokenUsage,
};

use crate::http;
use crate::traits::LlmProvider;

const ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: u32 = 4000;
const MISSING_KEY: &str = "Anthropic API key is not configured";
const API_ERROR: &str = "Anthropic API error";

// ─────────────────────────────────────────────
// Wire format
// ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    messages: Vec<MessageParam>,
    system: String,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct MessageParam {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    model: Option<String>,
    content: Vec<ContentBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
    #[serde(default)]
    usage: Option<MessagesUsage>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Default, Deserialize)]
struct MessagesUsage {
    #[serde(default)]
    input_tokens: u32,
    #[serde(default)]
    output_tokens: u32,
}

// ─────────────────────────────────────────────
// Provider
// ─────────────────────────────────────────────

/// Client for the Anthropic messages API.
pub struct AnthropicProvider {
    client: reqwest::Client,
    endpoint: String,
    model_key: String,
    wire_model_id: String,
    settings: Arc<dyn SettingsStore>,
}

impl std::fmt::Debug for AnthropicProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicProvider")
            .field("endpoint", &self.endpoint)
            .field("model_key", &self.model_key)
            .field("wire_model_id", &self.wire_model_id)
            .finish()
    }
}

impl AnthropicProvider {
    /// Create a client for a resolved model.
    pub fn new(descriptor: &ModelDescriptor, settings: Arc<dyn SettingsStore>) -> Self {
        AnthropicProvider {
            client: http::build_client(http::DEFAULT_TIMEOUT),
            endpoint: ENDPOINT.to_string(),
            model_key: descriptor.key.clone(),
            wire_model_id: descriptor.wire_id.clone(),
            settings,
        }
    }

    /// Point the client at a different endpoint (proxies, tests).
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
impl LlmProvider for AnthropicProvider {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, ProviderError> {
        let api_key = self.settings.credential(ProviderId::Anthropic);
        if api_key.is_empty() {
            return Err(ProviderError::for_provider(
                ProviderId::Anthropic,
                ErrorKind::Auth,
                MISSING_KEY,
            ));
        }

        let final_prompt = prompt::build_final_prompt(&request.text, &request.instructions);
        let body = MessagesRequest {
            model: self.wire_model_id.clone(),
            messages: vec![MessageParam {
                role: "user",
                content: final_prompt,
            }],
            system: prompt::SYSTEM_INSTRUCTION.to_string(),
            max_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            temperature: request.temperature,
        };

        debug!(
            provider = %ProviderId::Anthropic,
            model = %self.wire_model_id,
            max_tokens = body.max_tokens,
            "Calling LLM"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-Key", &api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| http::transport_error(ProviderId::Anthropic, e))?;

        if !response.status().is_success() {
            return Err(http::api_error(ProviderId::Anthropic, API_ERROR, response).await);
        }

        let data: MessagesResponse = response.json().await.map_err(|e| {
            ProviderError::for_provider(ProviderId::Anthropic, ErrorKind::Unknown, e.to_string())
        })?;

        let block = data.content.into_iter().next().ok_or_else(|| {
            ProviderError::for_provider(
                ProviderId::Anthropic,
                ErrorKind::Unknown,
                "Response contained no content",
            )
        })?;
        let usage = data.usage.unwrap_or_default();

        Ok(GenerationResult {
            html_content: extract_html(&block.text),
            wire_model_id: data.model,
            finish_reason: data.stop_reason,
            // Anthropic reports no total; it is always the computed sum.
            usage: Some(TokenUsage::new(usage.input_tokens, usage.output_tokens)),
        })
    }

    async fn is_available(&self) -> bool {
        !self.settings.credential(ProviderId::Anthropic).is_empty()
    }

    fn model_name(&self) -> &str {
        &self.model_key
    }

    fn provider_id(&self) -> ProviderId {
        ProviderId::Anthropic
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
