//! Get Ride By ID Use Case
//!
//! Retrieves a single ride by its identifier.

use std::sync::Arc;

use crate::domain::gateways::RideRepository;
use crate::domain::models::ride::{Ride, RideId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a ride by ID
pub struct GetRideByIdUseCase {
    ride_repository: Arc<dyn RideRepository>,
}

impl GetRideByIdUseCase {
    /// Create a new GetRideByIdUseCase
    #[must_use]
    pub fn new(ride_repository: Arc<dyn RideRepository>) -> Self {
        Self { ride_repository }
    }

    /// Execute the use case with the id exactly as the client sent it
    ///
    /// An id that is not an integer cannot match any row, so it is reported
    /// as not found without a storage round-trip.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::RidesNotFound` if no ride has this id.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, raw_id: &str) -> Result<Ride, UseCaseError> {
        let Ok(id) = RideId::try_from(raw_id) else {
            tracing::warn!(raw_id = %raw_id, "Ride id is not an integer");
            return Err(UseCaseError::RidesNotFound);
        };

        tracing::debug!(ride_id = %id, "Getting ride by ID");

        let ride = self.ride_repository.find_by_id(&id).await?.ok_or_else(|| {
            tracing::warn!(ride_id = %id, "Ride not found");
            UseCaseError::RidesNotFound
        })?;

        tracing::debug!(ride_id = %id, "Ride found");
        Ok(ride)
    }
}
