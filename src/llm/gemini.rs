//! Gemini client for the Generative Language API (`generateContent`).
//!
//! Behaviour:
//! - One non-streaming `POST {base_url}/models/{model}:generateContent` per prompt.
//! - Authenticates with the `x-goog-api-key` header.
//! - Returns the text parts of the first candidate, joined in order.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::error::{ProviderError, ProviderResult};
use super::provider::TextProvider;

/// Public Generative Language API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Connection timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Default client timeout for a full generation.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Gemini API configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key sent in `x-goog-api-key`.
    pub api_key: String,
    /// API root, without the `/models/...` suffix.
    pub base_url: String,
    /// Model name, e.g. `gemini-2.5-flash`.
    pub model: String,
    /// Upper bound for a whole request, including generation.
    pub request_timeout: Duration,
}

impl GeminiConfig {
    /// Create a config for the public endpoint and default model.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Set the model name.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    fn endpoint(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        ))
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Async Gemini client.
pub struct GeminiClient {
    config: GeminiConfig,
    endpoint: Url,
    http: Client,
}

impl GeminiClient {
    /// Build a client for the configured endpoint.
    ///
    /// # Errors
    /// Returns an error if the endpoint URL is invalid or the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> ProviderResult<Self> {
        let endpoint = config.endpoint()?;
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            config,
            endpoint,
            http,
        })
    }

    /// Model this client talks to.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl TextProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> ProviderResult<String> {
        let request = GenerateContentRequest {
            contents: [RequestContent {
                role: "user",
                parts: [RequestPart { text: prompt }],
            }],
        };

        debug!(model = %self.config.model, prompt_chars = prompt.len(), "gemini generateContent");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::http_status(status.as_u16(), &body));
        }

        extract_text(&body)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

/// Pull the first candidate's text out of a `generateContent` response body.
fn extract_text(body: &str) -> ProviderResult<String> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)?;

    let text: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.is_empty() {
        let reason = parsed.prompt_feedback.and_then(|f| f.block_reason);
        return Err(ProviderError::EmptyResponse(reason));
    }

    Ok(text)
}
