//! Ride Use Cases
//!
//! Business logic for booking rides and reading them back.

mod create_ride;
mod get_ride_by_id;
mod list_rides;

pub use create_ride::CreateRideUseCase;
pub use get_ride_by_id::GetRideByIdUseCase;
pub use list_rides::ListRidesUseCase;
