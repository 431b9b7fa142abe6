//! Ride DTOs
//!
//! Data transfer objects for ride API endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::domain::models::pagination::PageRequest;
use crate::domain::models::ride::{Ride, RideSubmission};
use crate::shared::errors::{ApiError, UseCaseError};

/// Coordinates may arrive as JSON strings or JSON numbers
fn coordinate_text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    }
}

/// Names must arrive as JSON strings; any other type counts as missing
fn string_only(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}

/// DTO for booking a new ride
///
/// Fields are kept loosely typed so that a wrong type surfaces as a
/// `VALIDATION_ERROR` from the validator instead of a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRideDto {
    #[serde(default)]
    pub start_lat: Option<Value>,
    #[serde(default)]
    pub end_lat: Option<Value>,
    #[serde(default)]
    pub start_long: Option<Value>,
    #[serde(default)]
    pub end_long: Option<Value>,
    #[serde(default)]
    pub rider_name: Option<Value>,
    #[serde(default)]
    pub driver_name: Option<Value>,
    #[serde(default)]
    pub driver_vehicle: Option<Value>,
}

impl From<CreateRideDto> for RideSubmission {
    fn from(dto: CreateRideDto) -> Self {
        Self {
            start_lat: coordinate_text(dto.start_lat),
            start_long: coordinate_text(dto.start_long),
            end_lat: coordinate_text(dto.end_lat),
            end_long: coordinate_text(dto.end_long),
            rider_name: string_only(dto.rider_name),
            driver_name: string_only(dto.driver_name),
            driver_vehicle: string_only(dto.driver_vehicle),
        }
    }
}

/// Raw `?page=&limit=` query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListRidesQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Parsed pagination parameters
#[derive(Debug, Clone, Validate)]
pub struct PaginationDto {
    #[validate(range(min = 1, message = "page must be a positive integer"))]
    pub page: i64,

    #[validate(range(min = 1, message = "limit must be a positive integer"))]
    pub limit: i64,
}

fn parse_integer(raw: Option<&str>, name: &str) -> Result<i64, ApiError> {
    raw.map(str::trim)
        .and_then(|text| text.parse::<i64>().ok())
        .ok_or_else(|| UseCaseError::Validation(format!("{name} must be a positive integer")).into())
}

impl TryFrom<ListRidesQuery> for PaginationDto {
    type Error = ApiError;

    fn try_from(query: ListRidesQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            page: parse_integer(query.page.as_deref(), "page")?,
            limit: parse_integer(query.limit.as_deref(), "limit")?,
        })
    }
}

impl PaginationDto {
    /// Validate and convert into a domain page request
    ///
    /// Page is checked before limit and only the first failure is reported.
    ///
    /// # Errors
    ///
    /// Returns a `VALIDATION_ERROR` if either value is below 1 or the offset overflows.
    pub fn into_page_request(self) -> Result<PageRequest, ApiError> {
        self.validate()
            .map_err(|errors| ApiError::from_validation(&errors, &["page", "limit"]))?;
        Ok(PageRequest::new(self.page, self.limit)?)
    }
}

/// Ride response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RideResponseDto {
    #[serde(rename = "rideID")]
    pub ride_id: i64,
    pub start_lat: f64,
    pub start_long: f64,
    pub end_lat: f64,
    pub end_long: f64,
    pub rider_name: String,
    pub driver_name: String,
    pub driver_vehicle: String,
    pub created: DateTime<Utc>,
}

impl From<Ride> for RideResponseDto {
    fn from(ride: Ride) -> Self {
        Self {
            ride_id: ride.id().value(),
            start_lat: ride.start_lat(),
            start_long: ride.start_long(),
            end_lat: ride.end_lat(),
            end_long: ride.end_long(),
            rider_name: ride.rider_name().to_string(),
            driver_name: ride.driver_name().to_string(),
            driver_vehicle: ride.driver_vehicle().to_string(),
            created: ride.created(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ride::RideId;
    use serde_json::json;

    fn query(page: Option<&str>, limit: Option<&str>) -> ListRidesQuery {
        ListRidesQuery {
            page: page.map(ToString::to_string),
            limit: limit.map(ToString::to_string),
        }
    }

    fn validation_message(err: ApiError) -> String {
        match err {
            ApiError::UseCase(UseCaseError::Validation(message)) => message,
            ApiError::UseCase(UseCaseError::Domain(domain)) => domain.to_string(),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_create_dto_accepts_strings_and_numbers() {
        let dto: CreateRideDto = serde_json::from_value(json!({
            "start_lat": "-89",
            "end_lat": -88,
            "start_long": 179.5,
            "end_long": "101",
            "rider_name": "John Jane",
            "driver_name": "John Doe",
            "driver_vehicle": "Jeep"
        }))
        .unwrap();

        let submission = RideSubmission::from(dto);
        assert_eq!(submission.start_lat.as_deref(), Some("-89"));
        assert_eq!(submission.end_lat.as_deref(), Some("-88"));
        assert_eq!(submission.start_long.as_deref(), Some("179.5"));
        assert_eq!(submission.rider_name.as_deref(), Some("John Jane"));
    }

    #[test]
    fn test_create_dto_drops_wrongly_typed_values() {
        let dto: CreateRideDto = serde_json::from_value(json!({
            "start_lat": true,
            "end_lat": null,
            "rider_name": 42,
            "driver_name": ["John"],
        }))
        .unwrap();

        let submission = RideSubmission::from(dto);
        assert!(submission.start_lat.is_none());
        assert!(submission.end_lat.is_none());
        assert!(submission.start_long.is_none());
        assert!(submission.rider_name.is_none());
        assert!(submission.driver_name.is_none());
        assert!(submission.driver_vehicle.is_none());
    }

    #[test]
    fn test_pagination_accepts_positive_integers() {
        let page = PaginationDto::try_from(query(Some("2"), Some("10")))
            .unwrap()
            .into_page_request()
            .unwrap();
        assert_eq!(page.offset(), 10);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn test_pagination_rejects_missing_values() {
        let err = PaginationDto::try_from(query(None, Some("10"))).unwrap_err();
        assert_eq!(validation_message(err), "page must be a positive integer");

        let err = PaginationDto::try_from(query(Some("1"), None)).unwrap_err();
        assert_eq!(validation_message(err), "limit must be a positive integer");
    }

    #[test]
    fn test_pagination_rejects_non_integers() {
        for raw in ["abc", "1.5", "", "1 OR 1=1"] {
            assert!(PaginationDto::try_from(query(Some(raw), Some("10"))).is_err());
        }
    }

    #[test]
    fn test_pagination_rejects_non_positive_values() {
        let err = PaginationDto::try_from(query(Some("0"), Some("10")))
            .unwrap()
            .into_page_request()
            .unwrap_err();
        assert_eq!(validation_message(err), "page must be a positive integer");

        let err = PaginationDto::try_from(query(Some("1"), Some("-3")))
            .unwrap()
            .into_page_request()
            .unwrap_err();
        assert_eq!(validation_message(err), "limit must be a positive integer");
    }

    #[test]
    fn test_pagination_reports_page_before_limit() {
        let err = PaginationDto::try_from(query(Some("0"), Some("0")))
            .unwrap()
            .into_page_request()
            .unwrap_err();
        assert_eq!(validation_message(err), "page must be a positive integer");
    }

    #[test]
    fn test_response_dto_uses_historical_field_names() {
        let ride = Ride::restore(
            RideId::from(1),
            -89.0,
            179.0,
            -88.0,
            101.0,
            "John Jane".to_string(),
            "John Doe".to_string(),
            "Jeep".to_string(),
            Utc::now(),
        );

        let value = serde_json::to_value(RideResponseDto::from(ride)).unwrap();

        assert_eq!(value["rideID"], json!(1));
        assert_eq!(value["startLat"], json!(-89.0));
        assert_eq!(value["startLong"], json!(179.0));
        assert_eq!(value["endLat"], json!(-88.0));
        assert_eq!(value["endLong"], json!(101.0));
        assert_eq!(value["riderName"], json!("John Jane"));
        assert_eq!(value["driverName"], json!("John Doe"));
        assert_eq!(value["driverVehicle"], json!("Jeep"));
        assert!(value["created"].is_string());
    }
}
