//! Ride Repository Gateway
//!
//! Abstract trait defining the contract for ride persistence operations.
//! The repository is the only component allowed to issue storage queries.

use async_trait::async_trait;

use crate::domain::models::pagination::PageRequest;
use crate::domain::models::ride::{CreateRideData, Ride, RideId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Ride persistence operations
#[async_trait]
pub trait RideRepository: Send + Sync {
    /// Insert a new ride and return the row as stored, with its
    /// generated id and creation timestamp
    async fn create(&self, data: &CreateRideData) -> Result<Ride, RepositoryError>;

    /// Find one page of rides in insertion order
    async fn find_page(&self, page: &PageRequest) -> Result<Vec<Ride>, RepositoryError>;

    /// Find a ride by its ID
    async fn find_by_id(&self, id: &RideId) -> Result<Option<Ride>, RepositoryError>;
}
