//! Ride Repository Implementations

mod sqlite;

pub use sqlite::SqliteRideRepository;
