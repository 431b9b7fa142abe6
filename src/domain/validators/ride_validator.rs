//! Ride Validator
//!
//! Checks a raw ride submission before it is allowed anywhere near storage.
//! Checks run in a fixed order and the first failure wins.

use std::ops::RangeInclusive;

use crate::domain::models::ride::{CreateRideData, RideSubmission};
use crate::shared::errors::{DomainError, RidePoint};

const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Validate a submission and return normalized values ready for persistence
///
/// # Errors
///
/// Returns `DomainError::CoordinatesOutOfRange` when either coordinate pair is
/// missing, non-numeric or out of range, and `DomainError::EmptyField` when a
/// name or vehicle is missing or empty.
pub fn validate_ride(submission: &RideSubmission) -> Result<CreateRideData, DomainError> {
    let start_lat = parse_coordinate(submission.start_lat.as_deref());
    let start_long = parse_coordinate(submission.start_long.as_deref());
    let end_lat = parse_coordinate(submission.end_lat.as_deref());
    let end_long = parse_coordinate(submission.end_long.as_deref());

    let (start_lat, start_long) =
        check_pair(start_lat, start_long).ok_or(DomainError::CoordinatesOutOfRange(RidePoint::Start))?;
    let (end_lat, end_long) =
        check_pair(end_lat, end_long).ok_or(DomainError::CoordinatesOutOfRange(RidePoint::End))?;

    let rider_name = require_non_empty(submission.rider_name.as_deref(), "Rider name")?;
    let driver_name = require_non_empty(submission.driver_name.as_deref(), "Driver name")?;
    let driver_vehicle = require_non_empty(submission.driver_vehicle.as_deref(), "Driver vehicle")?;

    Ok(CreateRideData {
        start_lat,
        start_long,
        end_lat,
        end_long,
        rider_name,
        driver_name,
        driver_vehicle,
    })
}

/// Parse a transport value as a finite number. Anything else becomes `None`.
fn parse_coordinate(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

fn check_pair(lat: Option<f64>, long: Option<f64>) -> Option<(f64, f64)> {
    match (lat, long) {
        (Some(lat), Some(long)) if LATITUDE_RANGE.contains(&lat) && LONGITUDE_RANGE.contains(&long) => {
            Some((lat, long))
        }
        _ => None,
    }
}

fn require_non_empty(value: Option<&str>, field: &'static str) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(DomainError::EmptyField(field)),
    }
}
