//! HTTP route handlers for the medicine information form.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::medicine::{InfoPayload, failure_message};

use super::state::AppState;

/// Shown when the form is submitted without a medicine name.
pub const EMPTY_NAME_MESSAGE: &str = "Please enter a medicine name.";

/// The form page.
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Create the router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/get_medicine_info", post(get_medicine_info))
        .with_state(state)
}

/// Serve the form page.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "medinfo",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Medicine lookup response.
#[derive(Debug, Serialize)]
pub struct MedicineInfoResponse {
    /// Sanitized provider text, or a user-facing message.
    pub medicine_info: String,
}

impl MedicineInfoResponse {
    fn new(medicine_info: impl Into<String>) -> Json<Self> {
        Json(Self {
            medicine_info: medicine_info.into(),
        })
    }
}

/// Handle a lookup: blank names short-circuit, provider failures become 502.
async fn get_medicine_info(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<InfoPayload>,
) -> (StatusCode, Json<MedicineInfoResponse>) {
    let Some(request) = payload.into_request() else {
        return (StatusCode::OK, MedicineInfoResponse::new(EMPTY_NAME_MESSAGE));
    };

    match state.medicine.generate(&request).await {
        Ok(text) => (StatusCode::OK, MedicineInfoResponse::new(text)),
        Err(e) => {
            tracing::error!(
                provider = state.medicine.provider_name(),
                medicine = request.medicine_name(),
                transport = e.is_transport(),
                "lookup failed: {e}"
            );
            (
                StatusCode::BAD_GATEWAY,
                MedicineInfoResponse::new(failure_message(&e)),
            )
        }
    }
}
