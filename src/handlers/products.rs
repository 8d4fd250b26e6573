use axum::{routing::get, Router};
use tracing::debug;

use crate::AppState;

pub const BASE_PATH: &str = "/api/v1/products";

/// Routes mounted under [`BASE_PATH`].
pub fn router() -> Router<AppState> {
    Router::new().route("/all", get(list_all_products))
}

// ── GET /api/v1/products/all ──────────────────────────────────────────────────

pub async fn list_all_products() -> &'static str {
    debug!("Listing all products");
    "All Products"
}
