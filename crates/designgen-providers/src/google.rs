//! Google Gemini generateContent client.
//!
//! The odd one out: the model id is part of the URL, the credential rides
//! in a `key` query parameter instead of a header, and the system
//! instruction has its own top-level field.

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

const ENDPOINT_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const MISSING_KEY: &str = "Google API key is not configured";
const API_ERROR: &str = "Google API error";
const EMPTY_RESPONSE: &str = "Response contained no data";

// ─────────────────────────────────────────────
// Wire format
// ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: SystemInstruction,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default, alias = "usageMetadata")]
    usage: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
    #[serde(default, rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

// ─────────────────────────────────────────────
// Provider
// ─────────────────────────────────────────────

/// Client for the Google Gemini generateContent API.
pub struct GoogleProvider {
    client: reqwest::Client,
    endpoint_base: String,
    model_key: String,
    wire_model_id: String,
    settings: Arc<dyn SettingsStore>,
}

impl std::fmt::Debug for GoogleProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleProvider")
            .field("endpoint_base", &self.endpoint_base)
            .field("model_key", &self.model_key)
            .field("wire_model_id", &self.wire_model_id)
            .finish()
    }
}

impl GoogleProvider {
    /// Create a client for a resolved model.
    pub fn new(descriptor: &ModelDescriptor, settings: Arc<dyn SettingsStore>) -> Self {
        GoogleProvider {
            client: http::build_client(http::DEFAULT_TIMEOUT),
            endpoint_base: ENDPOINT_BASE.to_string(),
            model_key: descriptor.key.clone(),
            wire_model_id: descriptor.wire_id.clone(),
            settings,
        }
    }

    /// Point the client at a different API base (proxies, tests).
    pub fn with_endpoint_base(mut self, base: impl Into<String>) -> Self {
        self.endpoint_base = base.into();
        self
    }

    /// Replace the transport deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = http::build_client(timeout);
        self
    }

    /// Build the per-model generateContent URL.
    fn generate_content_url(&self) -> String {
        let base = self.endpoint_base.trim_end_matches('/');
        format!("{}/models/{}:generateContent", base, self.wire_model_id)
    }
}

#[async_trait]
impl LlmProvider for GoogleProvider {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, ProviderError> {
        let api_key = self.settings.credential(ProviderId::Google);
        if api_key.is_empty() {
            return Err(ProviderError::for_provider(
                ProviderId::Google,
                ErrorKind::Auth,
                MISSING_KEY,
            ));
        }

        let final_prompt = prompt::build_final_prompt(&request.text, &request.instructions);
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: final_prompt }],
            }],
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: prompt::SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        };

        let url = self.generate_content_url();
        debug!(
            provider = %ProviderId::Google,
            model = %self.wire_model_id,
            temperature = request.temperature,
            "Calling LLM"
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| http::transport_error(ProviderId::Google, e))?;

        if !response.status().is_success() {
            return Err(http::api_error(ProviderId::Google, API_ERROR, response).await);
        }

        let data: GenerateContentResponse = response.json().await.map_err(|e| {
            ProviderError::for_provider(ProviderId::Google, ErrorKind::Unknown, e.to_string())
        })?;

        let candidate = data.candidates.into_iter().next().ok_or_else(|| {
            ProviderError::for_provider(ProviderId::Google, ErrorKind::Unknown, EMPTY_RESPONSE)
        })?;
        let part = candidate.content.parts.into_iter().next().ok_or_else(|| {
            ProviderError::for_provider(ProviderId::Google, ErrorKind::Unknown, EMPTY_RESPONSE)
        })?;

        Ok(GenerationResult {
            html_content: extract_html(&part.text),
            // The backend echoes no model id; report the one we called.
            wire_model_id: Some(self.wire_model_id.clone()),
            finish_reason: candidate.finish_reason,
            usage: data.usage.map(|u| TokenUsage {
                input: u.prompt_token_count,
                output: u.candidates_token_count,
                total: u.total_token_count,
            }),
        })
    }

    async fn is_available(&self) -> bool {
        !self.settings.credential(ProviderId::Google).is_empty()
    }

    fn model_name(&self) -> &str {
        &self.model_key
    }

    fn provider_id(&self) -> ProviderId {
        ProviderId::Google
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
