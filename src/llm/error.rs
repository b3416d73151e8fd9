//! Error types for provider calls.

use thiserror::Error;

/// Errors that can occur while obtaining text from a provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("provider returned HTTP {status}: {body}")]
    HttpStatus {
        /// Status code returned by the provider.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// Response body was not the JSON shape we expect.
    #[error("malformed provider response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Provider answered but produced no text.
    #[error("provider returned no text{}", blocked_suffix(.0.as_deref()))]
    EmptyResponse(Option<String>),

    /// Provider base URL or model could not form a valid endpoint.
    #[error("invalid provider endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl ProviderError {
    /// Maximum number of body characters kept in [`ProviderError::HttpStatus`].
    pub const MAX_BODY_CHARS: usize = 512;

    /// Build an HTTP status error, keeping only the start of the body.
    #[must_use]
    pub fn http_status(status: u16, body: &str) -> Self {
        Self::HttpStatus {
            status,
            body: body.chars().take(Self::MAX_BODY_CHARS).collect(),
        }
    }

    /// Check whether the provider was reached at all.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::HttpRequest(_))
    }
}

fn blocked_suffix(reason: Option<&str>) -> String {
    reason.map(|r| format!(" (blocked: {r})")).unwrap_or_default()
}

/// Convenience result alias for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
