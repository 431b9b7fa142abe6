//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod pagination;
pub mod ride;

pub use pagination::PageRequest;
pub use ride::{CreateRideData, Ride, RideId, RideSubmission};
