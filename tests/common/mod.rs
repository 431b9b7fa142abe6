//! Common test utilities for e2e tests
//!
//! Provides an in-memory SQLite database with the `Rides` table and a
//! router wired exactly like the binary.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tower::util::ServiceExt;

use ride_booking::domain::gateways::RideRepository;
use ride_booking::infrastructure::driven_adapters::config::AppConfig;
use ride_booking::infrastructure::driven_adapters::database::{create_pool, init_schema};
use ride_booking::infrastructure::driven_adapters::ride_repository::SqliteRideRepository;
use ride_booking::infrastructure::driving_adapters::api_rest::{create_router, AppState};

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    /// Application answering every error with 200, as legacy clients expect
    pub async fn new() -> Self {
        Self::with_error_status("legacy").await
    }

    /// Application mapping error codes onto 400/404/500
    pub async fn strict() -> Self {
        Self::with_error_status("strict").await
    }

    async fn with_error_status(policy: &str) -> Self {
        let config = create_test_config(policy);

        let pool = create_pool(&config.database)
            .await
            .expect("Failed to create in-memory database");
        init_schema(&pool).await.expect("Failed to create Rides table");

        let ride_repository: Arc<dyn RideRepository> =
            Arc::new(SqliteRideRepository::new(pool.clone()));
        let app_state = AppState::new(Arc::new(config), ride_repository);

        Self {
            router: create_router(app_state),
            pool,
        }
    }

    /// Send a request through the router
    pub async fn request(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed to respond")
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.request(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: &serde_json::Value) -> Response<Body> {
        self.post_raw(uri, &body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> Response<Body> {
        self.request(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Book a ride and return the stored record
    pub async fn create_ride(&self, ride: &CreateRideRequest) -> RideResponse {
        let response = self
            .post_json("/rides", &serde_json::to_value(ride).unwrap())
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let mut rides: Vec<RideResponse> = read_json(response).await;
        assert_eq!(rides.len(), 1);
        rides.remove(0)
    }

    pub async fn count_rides(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM Rides")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rides")
    }
}

/// Create a test configuration
fn create_test_config(error_status: &str) -> AppConfig {
    let config_str = format!(
        r#"
[server]
host = "127.0.0.1"
port = 0
error_status = "{error_status}"

[database]
url = "sqlite::memory:"
max_connections = 1
min_connections = 1
"#
    );

    AppConfig::from_toml(&config_str).expect("Failed to build test config")
}

pub async fn read_body(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn read_json<T: serde::de::DeserializeOwned>(response: Response<Body>) -> T {
    let body = read_body(response).await;
    serde_json::from_slice(&body).unwrap_or_else(|err| {
        panic!(
            "unexpected body {}: {err}",
            String::from_utf8_lossy(&body)
        )
    })
}

/// Helper struct for ride request bodies
#[derive(Debug, Clone, Serialize)]
pub struct CreateRideRequest {
    pub start_lat: String,
    pub start_long: String,
    pub end_lat: String,
    pub end_long: String,
    pub rider_name: String,
    pub driver_name: String,
    pub driver_vehicle: String,
}

impl Default for CreateRideRequest {
    fn default() -> Self {
        Self {
            start_lat: "-89".to_string(),
            start_long: "179".to_string(),
            end_lat: "-88".to_string(),
            end_long: "101".to_string(),
            rider_name: "John Jane".to_string(),
            driver_name: "John Doe".to_string(),
            driver_vehicle: "Jeep".to_string(),
        }
    }
}

impl CreateRideRequest {
    pub fn with_rider_name(mut self, rider_name: &str) -> Self {
        self.rider_name = rider_name.to_string();
        self
    }
}

/// Ride response structure for deserialization
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct RideResponse {
    #[serde(rename = "rideID")]
    pub ride_id: i64,
    pub start_lat: f64,
    pub start_long: f64,
    pub end_lat: f64,
    pub end_long: f64,
    pub rider_name: String,
    pub driver_name: String,
    pub driver_vehicle: String,
    pub created: String,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorResponse {
    pub error_code: String,
    pub message: String,
}
