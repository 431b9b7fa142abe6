//! List Rides Use Case
//!
//! Retrieves one page of rides in insertion order.

use std::sync::Arc;

use crate::domain::gateways::RideRepository;
use crate::domain::models::pagination::PageRequest;
use crate::domain::models::ride::Ride;
use crate::shared::errors::UseCaseError;

/// Use case for listing rides page by page
pub struct ListRidesUseCase {
    ride_repository: Arc<dyn RideRepository>,
}

impl ListRidesUseCase {
    /// Create a new ListRidesUseCase
    #[must_use]
    pub fn new(ride_repository: Arc<dyn RideRepository>) -> Self {
        Self { ride_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::RidesNotFound` if the page holds no rides.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, page: &PageRequest) -> Result<Vec<Ride>, UseCaseError> {
        tracing::debug!(page = page.page(), limit = page.limit(), "Listing rides");

        let rides = self.ride_repository.find_page(page).await?;

        if rides.is_empty() {
            tracing::warn!(page = page.page(), limit = page.limit(), "No rides on requested page");
            return Err(UseCaseError::RidesNotFound);
        }

        tracing::debug!(count = rides.len(), "Found rides");
        Ok(rides)
    }
}
