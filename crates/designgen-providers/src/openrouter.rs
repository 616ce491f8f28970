//! OpenRouter client.
//!
//! Wire-compatible with OpenAI chat completions; adds the two
//! identification headers OpenRouter asks integrating apps to send.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use designgen_core::error::{ErrorKind, ProviderError};
use designgen_core::normalize::extract_html;
use designgen_core::prompt;
use designgen_core::settings::SettingsStore;
use designgen_core::types::{
    GenerationRequest, GenerationResult, ModelDescriptor, ProviderId, TokenUsage,
};

use crate::http;
use crate::openai::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::traits::LlmProvider;

const ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
const REFERER: &str = "https://designgen.app";
const APP_TITLE: &str = "Design Generator";
const MISSING_KEY: &str = "OpenRouter API key is not configured";
const API_ERROR: &str = "OpenRouter API error";

/// Client for the OpenRouter gateway.
pub struct OpenRouterProvider {
    client: reqwest::Client,
    endpoint: String,
    model_key: String,
    wire_model_id: String,
    settings: Arc<dyn SettingsStore>,
}

impl std::fmt::Debug for OpenRouterProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterProvider")
            .field("endpoint", &self.endpoint)
            .field("model_key", &self.model_key)
            .field("wire_model_id", &self.wire_model_id)
            .finish()
    }
}

impl OpenRouterProvider {
    /// Create a client for a resolved model.
    pub fn new(descriptor: &ModelDescriptor, settings: Arc<dyn SettingsStore>) -> Self {
        OpenRouterProvider {
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
impl LlmProvider for OpenRouterProvider {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, ProviderError> {
        let api_key = self.settings.credential(ProviderId::OpenRouter);
        if api_key.is_empty() {
            return Err(ProviderError::for_provider(
                ProviderId::OpenRouter,
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
            provider = %ProviderId::OpenRouter,
            model = %self.wire_model_id,
            temperature = request.temperature,
            "Calling LLM"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&api_key)
            .header("HTTP-Referer", REFERER)
            .header("X-Title", APP_TITLE)
            .json(&body)
            .send()
            .await
            .map_err(|e| http::transport_error(ProviderId::OpenRouter, e))?;

        if !response.status().is_success() {
            return Err(http::api_error(ProviderId::OpenRouter, API_ERROR, response).await);
        }

        let data: ChatCompletionResponse = response.json().await.map_err(|e| {
            ProviderError::for_provider(ProviderId::OpenRouter, ErrorKind::Unknown, e.to_string())
        })?;

        let choice = data.choices.into_iter().next().ok_or_else(|| {
            ProviderError::for_provider(
                ProviderId::OpenRouter,
                ErrorKind::Unknown,
                "Response contained no choices",
            )
        })?;

        Ok(GenerationResult {
            html_content: extract_html(choice.message.content.as_deref().unwrap_or_default()),
            // Routed backends sometimes omit the model echo; fall back to
            // the id we asked for.
            wire_model_id: Some(
                data.model.unwrap_or_else(|| self.wire_model_id.clone()),
            ),
            finish_reason: choice.finish_reason,
            usage: data.usage.map(TokenUsage::from),
        })
    }

    async fn is_available(&self) -> bool {
        !self.settings.credential(ProviderId::OpenRouter).is_empty()
    }

    fn model_name(&self) -> &str {
        &self.model_key
    }

    fn provider_id(&self) -> ProviderId {
        ProviderId::OpenRouter
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use designgen_core::settings::MemorySettings;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_settings(api_key: &str) -> Arc<MemorySettings> {
        let settings = MemorySettings::new();
        settings.set_credential(ProviderId::OpenRouter, api_key);
        Arc::new(settings)
    }

    fn make_provider(server: &MockServer, api_key: &str) -> OpenRouterProvider {
        let descriptor = ModelDescriptor::new(
            "openrouter-llama3",
            "meta/llama-3-70b-instruct",
            ProviderId::OpenRouter,
            "Llama 3 70B (OR)",
        );
        OpenRouterProvider::new(&descriptor, make_settings(api_key))
            .with_endpoint(format!("{}/api/v1/chat/completions", server.uri()))
    }

    #[tokio::test]
    async fn test_generate_success_sends_identification_headers() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/chat/completions"))
            .and(header("Authorization", "Bearer sk-or-test"))
            .and(header("HTTP-Referer", REFERER))
            .and(header("X-Title", APP_TITLE))
            .and(body_partial_json(serde_json::json!({
                "model": "meta/llama-3-70b-instruct"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "gen-1",
                "model": "meta-llama/llama-3-70b-instruct",
                "choices": [{
                    "message": { "role": "assistant", "content": "```html\n<div>or</div>\n```" },
                    "finish_reason": "stop"
                }],
                "usage": { "prompt_tokens": 9, "completion_tokens": 18, "total_tokens": 27 }
            })))
            .mount(&server)
            .await;

        let provider = make_provider(&server, "sk-or-test");
        let result = provider
            .generate(&GenerationRequest::new("or", "openrouter-llama3"))
            .await
            .unwrap();

        assert_eq!(result.html_content, "<div>or</div>");
        assert_eq!(
            result.wire_model_id.as_deref(),
            Some("meta-llama/llama-3-70b-instruct")
        );
        assert_eq!(result.usage.unwrap().total, 27);
    }

    #[tokio::test]
    async fn test_generate_falls_back_to_requested_model_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{
                    "message": { "content": "ok" },
                    "finish_reason": "stop"
                }]
            })))
            .mount(&server)
            .await;

        let provider = make_provider(&server, "sk-or-test");
        let result = provider
            .generate(&GenerationRequest::new("hi", "openrouter-llama3"))
            .await
            .unwrap();

        assert_eq!(
            result.wire_model_id.as_deref(),
            Some("meta/llama-3-70b-instruct")
        );
        assert_eq!(result.usage, None);
    }

    #[tokio::test]
    async fn test_generate_without_key_fails_fast() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let provider = make_provider(&server, "");
        let err = provider
            .generate(&GenerationRequest::new("hi", "openrouter-llama3"))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Auth);
        assert_eq!(err.provider, Some(ProviderId::OpenRouter));
        assert!(err.message.contains("OpenRouter API key"));
    }

    #[tokio::test]
    async fn test_generate_payment_required_is_quota_exceeded() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(402).set_body_json(serde_json::json!({
                "error": {
                    "message": "Insufficient credits. Add more at openrouter.ai/credits",
                    "code": 402
                }
            })))
            .mount(&server)
            .await;

        let provider = make_provider(&server, "sk-or-test");
        let err = provider
            .generate(&GenerationRequest::new("hi", "openrouter-llama3"))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::QuotaExceeded);
        assert!(err.message.contains("Insufficient credits"));
    }
}
