//! Create Ride Use Case
//!
//! Validates a ride submission and persists it.

use std::sync::Arc;

use crate::domain::gateways::RideRepository;
use crate::domain::models::ride::{Ride, RideSubmission};
use crate::domain::validators::validate_ride;
use crate::shared::errors::UseCaseError;

/// Use case for booking a new ride
pub struct CreateRideUseCase {
    ride_repository: Arc<dyn RideRepository>,
}

impl CreateRideUseCase {
    /// Create a new CreateRideUseCase
    #[must_use]
    pub fn new(ride_repository: Arc<dyn RideRepository>) -> Self {
        Self { ride_repository }
    }

    /// Execute the use case
    ///
    /// Nothing is written unless every check in [`validate_ride`] passes.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the submission fails validation.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, submission: RideSubmission) -> Result<Ride, UseCaseError> {
        let data = validate_ride(&submission).inspect_err(|err| {
            tracing::warn!(reason = %err, "Rejected ride submission");
        })?;

        tracing::info!(
            rider_name = %data.rider_name,
            driver_name = %data.driver_name,
            "Creating new ride"
        );

        let created = self.ride_repository.create(&data).await?;

        tracing::info!(ride_id = %created.id(), "Ride created successfully");
        Ok(created)
    }
}
