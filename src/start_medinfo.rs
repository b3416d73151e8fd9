//! Startup helpers for the medicine info server.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::server::{self, AppState};

/// Run the server until Ctrl-C.
///
/// # Returns
/// `ExitCode::SUCCESS` on graceful shutdown, `1` on failure.
#[must_use]
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting medinfo v{}", env!("CARGO_PKG_VERSION"));

    match serve() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Load configuration and build application state without starting the server.
///
/// # Errors
/// Returns an error if configuration is incomplete or state creation fails.
pub fn initialize() -> Result<(AppConfig, Arc<AppState>)> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let state = build_state(&config)?;
    Ok((config, state))
}

/// Build application state from an already loaded configuration.
///
/// # Errors
/// Returns an error if the provider client or sanitizer cannot be created.
pub fn build_state(config: &AppConfig) -> Result<Arc<AppState>> {
    AppState::from_config(config).context("Failed to create state")
}

fn serve() -> Result<()> {
    let (config, state) = initialize()?;

    let rt = tokio::runtime::Runtime::new().context("Failed to create runtime")?;
    rt.block_on(server::run_server_with_shutdown(state, config.port, shutdown_signal()))
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::llm::GeminiConfig;

    fn config_with(gemini: GeminiConfig) -> AppConfig {
        AppConfig {
            gemini,
            port: 0,
            pricing_region: "India".to_string(),
        }
    }

    #[test]
    fn test_build_state_from_valid_config() {
        let state = build_state(&config_with(GeminiConfig::new("test-key"))).unwrap();
        assert_eq!(state.medicine.provider_name(), "gemini");
    }

    #[test]
    fn test_build_state_reports_error_chain() {
        let config = config_with(GeminiConfig::new("test-key").with_base_url("not a url"));
        let err = build_state(&config).err().expect("expected build_state to fail");
        let rendered = format!("{err:#}");
        assert!(rendered.starts_with("Failed to create state: failed to create provider client"));
        assert!(rendered.contains("invalid provider endpoint"));
    }
}
