//! HTTP server for the medicine information form.
//!
//! Provides:
//! - The form page
//! - Medicine lookups
//! - Health check

pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the router with CORS and request tracing.
pub fn build_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with graceful shutdown support.
///
/// The server will stop accepting new connections when `shutdown_signal` completes.
///
/// # Errors
/// Returns an error if the port cannot be bound or the server fails.
pub async fn run_server_with_shutdown<F>(
    state: Arc<AppState>,
    port: u16,
    shutdown_signal: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Medicine info server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}
