//! Error Status Middleware
//!
//! Applies the configured error status policy. Under the legacy policy
//! every error response goes out as 200 OK with the error only visible
//! in the `{error_code, message}` body, which is what existing clients
//! of the ride API expect.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::infrastructure::driven_adapters::config::ErrorStatusPolicy;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ErrorCode;

/// Rewrite the status of error responses to 200 under the legacy policy
pub async fn apply_error_status_policy(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    if state.config.server.error_status == ErrorStatusPolicy::Legacy
        && response.extensions().get::<ErrorCode>().is_some()
    {
        *response.status_mut() = StatusCode::OK;
    }

    response
}
