//! Application state shared across all request handlers.

use std::sync::Arc;

use thiserror::Error;

use crate::config::AppConfig;
use crate::llm::{GeminiClient, ProviderError, TextProvider};
use crate::medicine::{MedicineInfoService, PromptBuilder};

/// Errors raised while assembling the application state.
#[derive(Debug, Error)]
pub enum StateError {
    /// Sanitizer patterns failed to compile.
    #[error("failed to build sanitizer: {0}")]
    Sanitizer(#[from] regex::Error),
    /// Provider client could not be created.
    #[error("failed to create provider client: {0}")]
    Provider(#[from] ProviderError),
}

/// Shared application state.
pub struct AppState {
    /// Medicine lookup pipeline.
    pub medicine: MedicineInfoService,
}

impl AppState {
    /// Build state around an already constructed provider.
    ///
    /// # Errors
    /// Returns an error if the sanitizer patterns fail to compile.
    pub fn with_provider(
        provider: Arc<dyn TextProvider>,
        prompts: PromptBuilder,
    ) -> Result<Arc<Self>, StateError> {
        tracing::info!(
            "Provider: {}, pricing region: {}",
            provider.name(),
            prompts.pricing_region()
        );
        let medicine = MedicineInfoService::new(provider, prompts)?;
        Ok(Arc::new(Self { medicine }))
    }

    /// Build state with a Gemini client from configuration.
    ///
    /// # Errors
    /// Returns an error if the Gemini client cannot be created.
    pub fn from_config(config: &AppConfig) -> Result<Arc<Self>, StateError> {
        let gemini = GeminiClient::new(config.gemini.clone())?;
        tracing::info!("Gemini model: {}", gemini.model());

        Self::with_provider(
            Arc::new(gemini),
            PromptBuilder::new(config.pricing_region.as_str()),
        )
    }
}
