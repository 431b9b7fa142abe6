//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod ride;

pub use ride::{CreateRideDto, ListRidesQuery, PaginationDto, RideResponseDto};
