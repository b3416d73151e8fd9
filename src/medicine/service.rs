//! Prompt -> provider -> sanitize, with failures kept as values.

use std::sync::Arc;

use tracing::{debug, warn};

use super::prompt::PromptBuilder;
use super::request::InfoRequest;
use super::sanitize::ResponseSanitizer;
use crate::llm::{ProviderError, ProviderResult, TextProvider};

/// Display-ready provider text: no bold markers, no blank-line runs.
pub type InfoText = String;

/// Prefix of the user-facing failure text.
const FAILURE_PREFIX: &str = "Error generating medicine info";

/// Render a provider failure the way the form page shows it.
#[must_use]
pub fn failure_message(err: &ProviderError) -> String {
    format!("{FAILURE_PREFIX}: {err}")
}

/// Medicine lookup pipeline over an injected provider.
#[derive(Clone)]
pub struct MedicineInfoService {
    provider: Arc<dyn TextProvider>,
    prompts: PromptBuilder,
    sanitizer: ResponseSanitizer,
}

impl MedicineInfoService {
    /// Create a service with the given provider and prompt builder.
    ///
    /// # Errors
    /// Returns an error if the sanitizer patterns fail to compile.
    pub fn new(
        provider: Arc<dyn TextProvider>,
        prompts: PromptBuilder,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            provider,
            prompts,
            sanitizer: ResponseSanitizer::new()?,
        })
    }

    /// Name of the underlying provider.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Look up one medicine. Single attempt, no retry.
    ///
    /// # Errors
    /// Returns the provider's error unchanged; rendering it is up to the caller.
    pub async fn generate(&self, request: &InfoRequest) -> ProviderResult<InfoText> {
        let prompt = self
            .prompts
            .build(request.medicine_name(), request.strength());

        let raw = self.provider.generate(&prompt).await.inspect_err(|e| {
            warn!(
                provider = self.provider.name(),
                medicine = request.medicine_name(),
                "provider call failed: {e}"
            );
        })?;

        let text = self.sanitizer.sanitize(Some(&raw));
        debug!(
            medicine = request.medicine_name(),
            raw_chars = raw.len(),
            clean_chars = text.len(),
            "medicine info generated"
        );
        Ok(text)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;

    /// Canned outcome of a [`FakeProvider`] call.
    enum Reply {
        Text(String),
        Status(u16),
        Blocked(String),
    }

    /// Provider double that records prompts and replays a canned reply.
    pub(crate) struct FakeProvider {
        reply: Reply,
        pub(crate) prompts: Mutex<Vec<String>>,
    }

    impl FakeProvider {
        fn with_reply(reply: Reply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn replying(text: &str) -> Arc<Self> {
            Self::with_reply(Reply::Text(text.to_string()))
        }

        pub(crate) fn failing(status: u16) -> Arc<Self> {
            Self::with_reply(Reply::Status(status))
        }

        pub(crate) fn blocked(reason: &str) -> Arc<Self> {
            Self::with_reply(Reply::Blocked(reason.to_string()))
        }

        pub(crate) fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextProvider for FakeProvider {
        async fn generate(&self, prompt: &str) -> ProviderResult<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Reply::Text(text) => Ok(text.clone()),
                Reply::Status(status) => {
                    Err(ProviderError::http_status(*status, "upstream unavailable"))
                }
                Reply::Blocked(reason) => Err(ProviderError::EmptyResponse(Some(reason.clone()))),
            }
        }

        fn name(&self) -> &str {
            "fake"
        }
    }

    fn request(name: &str, strength: &str) -> InfoRequest {
        InfoRequest::from_raw(name, strength).unwrap()
    }

    #[tokio::test]
    async fn test_generate_sanitizes_provider_text() {
        let provider = FakeProvider::replying("**Uses**\n\n\nRelieves pain\nâ€¢ take with food");
        let service =
            MedicineInfoService::new(provider.clone(), PromptBuilder::default()).unwrap();

        let text = service.generate(&request("Paracetamol", "500mg")).await.unwrap();
        assert_eq!(text, "Uses\nRelieves pain\n- take with food");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_generate_sends_built_prompt() {
        let provider = FakeProvider::replying("ok");
        let service =
            MedicineInfoService::new(provider.clone(), PromptBuilder::new("Brazil")).unwrap();

        service.generate(&request("Ibuprofen", "")).await.unwrap();
        let prompts = provider.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], PromptBuilder::new("Brazil").build("Ibuprofen", ""));
    }

    #[tokio::test]
    async fn test_generate_returns_tagged_failure_without_retry() {
        let provider = FakeProvider::failing(503);
        let service =
            MedicineInfoService::new(provider.clone(), PromptBuilder::default()).unwrap();

        let err = service.generate(&request("Aspirin", "")).await.unwrap_err();
        assert!(matches!(err, ProviderError::HttpStatus { status: 503, .. }));
        assert_eq!(provider.calls(), 1);
        assert_eq!(
            failure_message(&err),
            "Error generating medicine info: provider returned HTTP 503: upstream unavailable"
        );
    }

    #[tokio::test]
    async fn test_empty_provider_text_is_not_an_error() {
        let provider = FakeProvider::replying("  \n\n ");
        let service = MedicineInfoService::new(provider, PromptBuilder::default()).unwrap();

        let text = service.generate(&request("Aspirin", "")).await.unwrap();
        assert_eq!(text, "");
        assert_eq!(service.provider_name(), "fake");
    }
}
