//! Ride Booking API
//!
//! A Rust-based microservice for recording ride bookings and reading them
//! back, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
