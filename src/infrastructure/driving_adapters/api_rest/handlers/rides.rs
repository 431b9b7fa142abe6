//! Ride Handlers
//!
//! HTTP handlers for booking and reading rides.
//! Successful responses always carry a JSON array of rides.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Json, Router,
};

use crate::infrastructure::driving_adapters::api_rest::dto::ride::{
    CreateRideDto, ListRidesQuery, PaginationDto, RideResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, UseCaseError};

/// Create the router for ride endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_ride))
        .route("/", get(list_rides))
        .route("/{id}", get(get_ride_by_id))
}

/// POST /rides - Book a new ride
///
/// # Responses
///
/// * Array holding the stored ride, including `rideID` and `created`
/// * `VALIDATION_ERROR` - coordinates out of range, empty names or malformed body
/// * `SERVER_ERROR` - storage failure
#[axum::debug_handler]
async fn create_ride(
    State(state): State<AppState>,
    payload: Result<Json<CreateRideDto>, JsonRejection>,
) -> Result<Json<Vec<RideResponseDto>>, ApiError> {
    let Json(dto) = payload?;

    let ride = state.create_ride_use_case.execute(dto.into()).await?;

    Ok(Json(vec![RideResponseDto::from(ride)]))
}

/// GET /rides?page=&limit= - One page of rides in insertion order
///
/// # Responses
///
/// * Array of at most `limit` rides
/// * `VALIDATION_ERROR` - page or limit missing, not an integer or below 1
/// * `RIDES_NOT_FOUND_ERROR` - the page is empty
/// * `SERVER_ERROR` - storage failure
#[axum::debug_handler]
async fn list_rides(
    State(state): State<AppState>,
    query: Result<Query<ListRidesQuery>, QueryRejection>,
) -> Result<Json<Vec<RideResponseDto>>, ApiError> {
    let Query(query) = query?;
    let page = PaginationDto::try_from(query)?.into_page_request()?;

    let rides = state.list_rides_use_case.execute(&page).await?;

    let response: Vec<RideResponseDto> = rides.into_iter().map(RideResponseDto::from).collect();
    Ok(Json(response))
}

/// GET /rides/{id} - A single ride
///
/// # Responses
///
/// * Array holding exactly one ride
/// * `RIDES_NOT_FOUND_ERROR` - no ride with that id, or the id is not an integer
/// * `SERVER_ERROR` - storage failure
#[axum::debug_handler]
async fn get_ride_by_id(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<RideResponseDto>>, ApiError> {
    // An id segment that does not even decode cannot name a ride
    let Path(id) = id.map_err(|rejection| {
        tracing::warn!(detail = %rejection.body_text(), "Ride id could not be decoded");
        UseCaseError::RidesNotFound
    })?;

    let ride = state.get_ride_by_id_use_case.execute(&id).await?;

    Ok(Json(vec![RideResponseDto::from(ride)]))
}
