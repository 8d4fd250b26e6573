pub mod products;

use axum::{extract::State, http::StatusCode, http::Uri, Json};
use serde_json::json;
use tracing::debug;

use crate::{error::AppError, AppState};

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": state.config.service_name,
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// Catch-all for unmatched routes.
pub async fn not_found(uri: Uri) -> AppError {
    debug!(path = %uri.path(), "No route matched");
    AppError::NotFound(uri.path().to_string())
}
