//! Medicine information pipeline.
//!
//! `InfoRequest` -> [`PromptBuilder`] -> provider -> [`ResponseSanitizer`] -> `InfoText`.
//! Both ends are pure; only the provider call in [`MedicineInfoService`] does I/O.

pub mod prompt;
pub mod request;
pub mod sanitize;
pub mod service;

pub use prompt::{PromptBuilder, build_prompt};
pub use request::{InfoPayload, InfoRequest};
pub use sanitize::{ResponseSanitizer, sanitize};
pub use service::{InfoText, MedicineInfoService, failure_message};
