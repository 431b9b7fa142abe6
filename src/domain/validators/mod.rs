//! Domain Validators
//!
//! Pure checks applied to client input before it reaches a gateway.

pub mod ride_validator;

pub use ride_validator::validate_ride;
