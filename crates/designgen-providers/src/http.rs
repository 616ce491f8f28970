//! Shared HTTP plumbing for the provider clients.
//!
//! Each backend keeps its own wire format; what they share is client
//! construction, transport-failure mapping, and the error-body message
//! ladder.

use std::time::Duration;

use tracing::error;

use designgen_core::error::{classify_status, ErrorKind, ProviderError};
use designgen_core::types::ProviderId;

/// Deadline applied to every request unless a caller overrides it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Build the connection-pooled client a provider instance keeps for its
/// lifetime.
pub fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to build HTTP client")
}

/// Map a transport-level failure (no HTTP response received) to a
/// [`ProviderError`].
///
/// An expired deadline is the one transport failure with its own kind;
/// everything else (refused connection, DNS, TLS) is `Unknown`.
pub fn transport_error(provider: ProviderId, err: reqwest::Error) -> ProviderError {
    let kind = if err.is_timeout() {
        ErrorKind::Timeout
    } else {
        ErrorKind::Unknown
    };
    error!(provider = %provider, error = %err, "HTTP request failed");
    ProviderError::for_provider(provider, kind, err.to_string())
}

/// Pull a human-readable message out of an API error body.
///
/// The backends use two shapes: `{"error": {"message": "..."}}` (OpenAI,
/// Anthropic, Google, OpenRouter) and `{"error": "..."}` (Ollama). Returns
/// `None` for non-JSON bodies and shapes carrying neither.
pub fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("error")? {
        serde_json::Value::String(message) => Some(message.clone()),
        detail => detail
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(String::from),
    }
}

/// Turn a non-2xx response into a classified [`ProviderError`].
///
/// Reads the body once, classifies on status code plus body markers, and
/// uses `fallback` when the body yields no message.
pub async fn api_error(
    provider: ProviderId,
    fallback: &str,
    response: reqwest::Response,
) -> ProviderError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    error!(provider = %provider, status, body = %body, "API error");
    let kind = classify_status(status, &body);
    let message = error_message(&body).unwrap_or_else(|| fallback.to_string());
    ProviderError::for_provider(provider, kind, message)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── error_message ──

    #[test]
    fn test_error_message_object_form() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(
            error_message(body).as_deref(),
            Some("Incorrect API key provided")
        );
    }

    #[test]
    fn test_error_message_bare_string_form() {
        let body = r#"{"error": "model 'llama3' not found, try pulling it first"}"#;
        assert_eq!(
            error_message(body).as_deref(),
            Some("model 'llama3' not found, try pulling it first")
        );
    }

    #[test]
    fn test_error_message_non_json_body() {
        assert_eq!(error_message("<html>502 Bad Gateway</html>"), None);
        assert_eq!(error_message(""), None);
    }

    #[test]
    fn test_error_message_shape_without_message() {
        assert_eq!(error_message(r#"{"error": {"code": 429}}"#), None);
        assert_eq!(error_message(r#"{"detail": "not the error field"}"#), None);
    }
}
