//! HTTP Router
//!
//! Assembles the ride and health routes with the middleware stack.

use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{health, rides};
use super::middleware::{apply_error_status_policy, request_id_middleware};
use super::AppState;

/// Build the application router
///
/// Layers, outermost first: HTTP tracing, CORS, request id, error status policy.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health::router())
        .nest("/rides", rides::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            apply_error_status_policy,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(middleware::from_fn(request_id_middleware)),
        )
        .with_state(state)
}
