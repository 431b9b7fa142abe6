//! Health Handler

use axum::{routing::get, Router};

use crate::infrastructure::driving_adapters::api_rest::AppState;

/// Create the router for the liveness probe
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

/// GET /health - Liveness probe
///
/// Always answers `Healthy` as plain text; storage is not consulted.
async fn health() -> &'static str {
    "Healthy"
}
