//! OpenAI chat-completions client.

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

const ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const MISSING_KEY: &str = "OpenAI API key is not configured";
const API_ERROR: &str = "OpenAI API error";

// ─────────────────────────────────────────────
// Wire format (shared with the OpenRouter client)
// ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "user",
            content: content.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl From<ChatUsage> for TokenUsage {
    fn from(usage: ChatUsage) -> Self {
        TokenUsage {
            input: usage.prompt_tokens,
            output: usage.completion_tokens,
            total: usage.total_tokens,
        }
    }
}

// ─────────────────────────────────────────────
// Provider
// ─────────────────────────────────────────────

/// Client for the OpenAI chat-completions API.
pub struct OpenAiProvider {
    client: reqwest::Client,
    endpoint: String,
    model_key: String,
    wire_model_id: String,
    settings: Arc<dyn SettingsStore>,
}

impl std::fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("endpoint", &self.endpoint)
            .field("model_key", &self.model_key)
            .field("wire_model_id", &self.wire_model_id)
            .finish()
    }
}

impl OpenAiProvider {
    /// Create a client for a resolved model.
    pub fn new(descriptor: &ModelDescriptor, settings: Arc<dyn SettingsStore>) -> Self {
        OpenAiProvider {
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
impl LlmProvider for OpenAiProvider {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, ProviderError> {
        let api_key = self.settings.credential(ProviderId::OpenAi);
        if api_key.is_empty() {
            return Err(ProviderError::for_provider(
                ProviderId::OpenAi,
                ErrorKind::Auth,
                MISSING_KEY,
            ));
        }

        let final_prompt = prompt::build_final_prompt(&request.text, &request.instructions);
        let body = ChatCompletionRequest {
            model: self.wire_model_id.clone(),
            messages: vec![
                ChatMessage::system(prompt::SYSTEM_INSTRUCTION),
                ChatMessage::user(final_prompt),
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(
            provider = %ProviderId::OpenAi,
            model = %self.wire_model_id,
            temperature = request.temperature,
            "Calling LLM"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| http::transport_error(ProviderId::OpenAi, e))?;

        if !response.status().is_success() {
            return Err(http::api_error(ProviderId::OpenAi, API_ERROR, response).await);
        }

        let data: ChatCompletionResponse = response.json().await.map_err(|e| {
            ProviderError::for_provider(ProviderId::OpenAi, ErrorKind::Unknown, e.to_string())
        })?;

        let choice = data.choices.into_iter().next().ok_or_else(|| {
            ProviderError::for_provider(
                ProviderId::OpenAi,
                ErrorKind::Unknown,
                "Response contained no choices",
            )
        })?;

        Ok(GenerationResult {
            html_content: extract_html(choice.message.content.as_deref().unwrap_or_default()),
            wire_model_id: data.model,
            finish_reason: choice.finish_reason,
            usage: data.usage.map(TokenUsage::from),
        })
    }

    async fn is_available(&self) -> bool {
        !self.settings.credential(ProviderId::OpenAi).is_empty()
    }

    fn model_name(&self) -> &str {
        &self.model_key
    }

    fn provider_id(&self) -> ProviderId {
        ProviderId::OpenAi
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
