//! The provider seam.

use async_trait::async_trait;

use super::error::ProviderResult;

/// Something that turns a prompt into free-form text.
///
/// Implementations must be safe to share between concurrent requests; the
/// server holds a single instance behind an `Arc`.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send `prompt` and return the raw reply text.
    ///
    /// # Errors
    /// Returns an error if the provider cannot be reached or yields no text.
    async fn generate(&self, prompt: &str) -> ProviderResult<String>;

    /// Short label used in logs.
    fn name(&self) -> &str;
}
