//! Domain Layer
//!
//! Contains the core business logic, domain models, validators and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;
pub mod validators;

pub use gateways::ride_repository::RideRepository;
pub use models::pagination::PageRequest;
pub use models::ride::{CreateRideData, Ride, RideId, RideSubmission};
pub use validators::ride_validator::validate_ride;
