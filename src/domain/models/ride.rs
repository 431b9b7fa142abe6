//! Ride Domain Model
//!
//! Represents a single booked trip with its coordinates and participants.

use std::num::ParseIntError;

use chrono::{DateTime, Utc};

/// Newtype wrapper for the storage-assigned ride identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RideId(i64);

impl RideId {
    /// Get the underlying integer value
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RideId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl TryFrom<&str> for RideId {
    type Error = ParseIntError;

    /// Integral decimals such as `1.0` name the same row as `1`
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<i64>() {
            Ok(id) => Ok(Self(id)),
            Err(err) => integral_decimal(value).map(Self).ok_or(err),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integral_decimal(value: &str) -> Option<i64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.fract() == 0.0)
        .filter(|v| *v >= i64::MIN as f64 && *v < i64::MAX as f64)
        .map(|v| v as i64)
}

/// Raw ride fields as received from a client, before validation.
///
/// `None` means the field was absent or had a type that cannot carry the value.
#[derive(Debug, Clone, Default)]
pub struct RideSubmission {
    pub start_lat: Option<String>,
    pub start_long: Option<String>,
    pub end_lat: Option<String>,
    pub end_long: Option<String>,
    pub rider_name: Option<String>,
    pub driver_name: Option<String>,
    pub driver_vehicle: Option<String>,
}

/// Validated data required to persist a new Ride
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRideData {
    pub start_lat: f64,
    pub start_long: f64,
    pub end_lat: f64,
    pub end_long: f64,
    pub rider_name: String,
    pub driver_name: String,
    pub driver_vehicle: String,
}

/// Ride domain entity as persisted in storage
#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    id: RideId,
    start_lat: f64,
    start_long: f64,
    end_lat: f64,
    end_long: f64,
    rider_name: String,
    driver_name: String,
    driver_vehicle: String,
    created: DateTime<Utc>,
}

impl Ride {
    /// Restore a Ride from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: RideId,
        start_lat: f64,
        start_long: f64,
        end_lat: f64,
        end_long: f64,
        rider_name: String,
        driver_name: String,
        driver_vehicle: String,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            start_lat,
            start_long,
            end_lat,
            end_long,
            rider_name,
            driver_name,
            driver_vehicle,
            created,
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> RideId {
        self.id
    }

    #[must_use]
    pub fn start_lat(&self) -> f64 {
        self.start_lat
    }

    #[must_use]
    pub fn start_long(&self) -> f64 {
        self.start_long
    }

    #[must_use]
    pub fn end_lat(&self) -> f64 {
        self.end_lat
    }

    #[must_use]
    pub fn end_long(&self) -> f64 {
        self.end_long
    }

    #[must_use]
    pub fn rider_name(&self) -> &str {
        &self.rider_name
    }

    #[must_use]
    pub fn driver_name(&self) -> &str {
        &self.driver_name
    }

    #[must_use]
    pub fn driver_vehicle(&self) -> &str {
        &self.driver_vehicle
    }

    #[must_use]
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }
}
