//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database connection and schema
//! - Ride repository
//! - Configuration

pub mod config;
pub mod database;
pub mod ride_repository;

pub use config::AppConfig;
pub use ride_repository::SqliteRideRepository;
