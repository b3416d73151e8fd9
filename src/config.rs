//! Configuration loaded from the environment (and `.env`).

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::llm::GeminiConfig;
use crate::llm::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::medicine::prompt::DEFAULT_PRICING_REGION;

/// Environment variable holding the provider API key (required).
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
/// Environment variable selecting the Gemini model.
pub const MODEL_ENV: &str = "GEMINI_MODEL";
/// Environment variable overriding the Gemini API root.
pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";
/// Environment variable for the listening port.
pub const PORT_ENV: &str = "MEDINFO_PORT";
/// Environment variable for the pricing region named in prompts.
pub const PRICING_REGION_ENV: &str = "MEDINFO_PRICING_REGION";
/// Environment variable for the provider request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "MEDINFO_REQUEST_TIMEOUT_SECS";

/// Default server port.
pub const DEFAULT_PORT: u16 = 5000;
/// Default provider request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("{0} not found in environment or .env file")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("invalid value for {name}: {value:?}")]
    Invalid {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
    },

    /// The provider base URL is not a valid URL.
    #[error("invalid GEMINI_BASE_URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Provider settings.
    pub gemini: GeminiConfig,
    /// Listening port.
    pub port: u16,
    /// Region named in the pricing section of prompts.
    pub pricing_region: String,
}

impl AppConfig {
    /// Read `.env` if present, then load from the process environment.
    ///
    /// # Errors
    /// Returns an error if the API key is missing or a value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenv::dotenv() {
            tracing::debug!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using `lookup` to resolve variable names.
    ///
    /// # Errors
    /// Returns an error if the API key is missing or a value is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(API_KEY_ENV).ok_or(ConfigError::Missing(API_KEY_ENV))?;
        let model = get(MODEL_ENV).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = get(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url)?;

        let port = parse_or(get(PORT_ENV), PORT_ENV, DEFAULT_PORT)?;
        let timeout_secs = parse_or(get(TIMEOUT_ENV), TIMEOUT_ENV, DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: TIMEOUT_ENV,
                value: "0".to_string(),
            });
        }
        let pricing_region =
            get(PRICING_REGION_ENV).unwrap_or_else(|| DEFAULT_PRICING_REGION.to_string());

        let gemini = GeminiConfig::new(api_key)
            .with_model(model)
            .with_base_url(base_url)
            .with_timeout(Duration::from_secs(timeout_secs));

        Ok(Self {
            gemini,
            port,
            pricing_region,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid { name, value: v }),
    }
}
