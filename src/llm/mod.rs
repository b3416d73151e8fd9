//! Generative-text providers.
//!
//! The rest of the crate only sees [`TextProvider`]; the Gemini client is one
//! implementation of it and tests substitute their own.

pub mod error;
pub mod gemini;
pub mod provider;

pub use error::{ProviderError, ProviderResult};
pub use gemini::{GeminiClient, GeminiConfig};
pub use provider::TextProvider;
