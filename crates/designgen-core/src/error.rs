//! The single error type every provider call funnels into.
//!
//! Backends differ wildly in how they report failure (status codes, JSON
//! envelopes, bare text bodies). Callers only ever see [`ProviderError`]:
//! one of seven [`ErrorKind`]s, the backend it came from when attributable,
//! and a human-readable message. Policy (retry, re-prompt for a key, give
//! up) stays with the caller.

use crate::types::ProviderId;
use thiserror::Error;

// ─────────────────────────────────────────────
// Error kinds
// ─────────────────────────────────────────────

/// Canonical failure categories, stable across backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Credential missing, invalid, or rejected (401/403).
    Auth,
    /// Backend throttled the request (429 without a quota marker).
    RateLimit,
    /// Billing/credit exhaustion (402, or 429 with a quota marker).
    QuotaExceeded,
    /// The request itself is malformed or names something unknown (400).
    InvalidRequest,
    /// Backend-side failure (500/502/503).
    Server,
    /// The transport deadline expired before a response arrived.
    Timeout,
    /// Anything that fits no other category, decode failures included.
    Unknown,
}

impl ErrorKind {
    /// Stable machine-readable name for each kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Auth => "auth_error",
            ErrorKind::RateLimit => "rate_limit",
            ErrorKind::QuotaExceeded => "quota_exceeded",
            ErrorKind::InvalidRequest => "invalid_request",
            ErrorKind::Server => "server_error",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────
// Provider error
// ─────────────────────────────────────────────

/// A failed provider operation.
///
/// `provider` is `None` when no backend is attributable — registry misses
/// and factory rejections happen before any backend is chosen. Display then
/// falls back to `unknown`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("[{}] {}: {}", provider_label(.provider), .kind, .message)]
pub struct ProviderError {
    pub kind: ErrorKind,
    pub provider: Option<ProviderId>,
    pub message: String,
}

fn provider_label(provider: &Option<ProviderId>) -> &'static str {
    match provider {
        Some(p) => p.as_str(),
        None => "unknown",
    }
}

impl ProviderError {
    /// An error not attributable to any backend.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ProviderError {
            kind,
            provider: None,
            message: message.into(),
        }
    }

    /// An error raised by a specific backend.
    pub fn for_provider(
        provider: ProviderId,
        kind: ErrorKind,
        message: impl Into<String>,
    ) -> Self {
        ProviderError {
            kind,
            provider: Some(provider),
            message: message.into(),
        }
    }
}

// ─────────────────────────────────────────────
// Status classification
// ─────────────────────────────────────────────

/// Map an HTTP status (plus the raw error body) to an [`ErrorKind`].
///
/// The body matters only for 429: backends report both throttling and
/// exhausted credit with 429, distinguished by a quota marker in the error
/// payload ("insufficient_quota", "quota exceeded", ...). The check is
/// case-insensitive.
pub fn classify_status(status: u16, body: &str) -> ErrorKind {
    match status {
        400 => ErrorKind::InvalidRequest,
        401 | 403 => ErrorKind::Auth,
        402 => ErrorKind::QuotaExceeded,
        429 => {
            let lower = body.to_lowercase();
            if lower.contains("quota") || lower.contains("insufficient") {
                ErrorKind::QuotaExceeded
            } else {
                ErrorKind::RateLimit
            }
        }
        500 | 502 | 503 => ErrorKind::Server,
        _ => ErrorKind::Unknown,
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
