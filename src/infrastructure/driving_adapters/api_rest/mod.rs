//! REST API Module
//!
//! Contains HTTP handlers, DTOs, middleware and the router for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use crate::application::use_cases::rides::{
    CreateRideUseCase, GetRideByIdUseCase, ListRidesUseCase,
};
use crate::domain::gateways::RideRepository;
use crate::infrastructure::driven_adapters::config::AppConfig;

pub use routes::create_router;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub create_ride_use_case: Arc<CreateRideUseCase>,
    pub list_rides_use_case: Arc<ListRidesUseCase>,
    pub get_ride_by_id_use_case: Arc<GetRideByIdUseCase>,
}

impl AppState {
    /// Wire every use case to the same repository
    #[must_use]
    pub fn new(config: Arc<AppConfig>, ride_repository: Arc<dyn RideRepository>) -> Self {
        Self {
            config,
            create_ride_use_case: Arc::new(CreateRideUseCase::new(ride_repository.clone())),
            list_rides_use_case: Arc::new(ListRidesUseCase::new(ride_repository.clone())),
            get_ride_by_id_use_case: Arc::new(GetRideByIdUseCase::new(ride_repository)),
        }
    }
}
