//! SQLite Ride Repository Implementation
//!
//! Implements the RideRepository trait using SQLx for SQLite.
//! Every value reaching a statement is bound as a parameter.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use crate::domain::gateways::RideRepository;
use crate::domain::models::pagination::PageRequest;
use crate::domain::models::ride::{CreateRideData, Ride, RideId};
use crate::shared::errors::RepositoryError;

/// Database row representation for the Rides table
#[derive(Debug, sqlx::FromRow)]
struct RideRow {
    ride_id: i64,
    start_lat: f64,
    start_long: f64,
    end_lat: f64,
    end_long: f64,
    rider_name: String,
    driver_name: String,
    driver_vehicle: String,
    created: NaiveDateTime,
}

impl From<RideRow> for Ride {
    fn from(row: RideRow) -> Self {
        // CURRENT_TIMESTAMP is always UTC
        Ride::restore(
            RideId::from(row.ride_id),
            row.start_lat,
            row.start_long,
            row.end_lat,
            row.end_long,
            row.rider_name,
            row.driver_name,
            row.driver_vehicle,
            row.created.and_utc(),
        )
    }
}

/// SQLite implementation of RideRepository
pub struct SqliteRideRepository {
    pool: SqlitePool,
}

impl SqliteRideRepository {
    /// Create a new SqliteRideRepository
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RideRepository for SqliteRideRepository {
    async fn create(&self, data: &CreateRideData) -> Result<Ride, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let ride_id = sqlx::query(
            r#"
            INSERT INTO Rides (
                startLat, startLong, endLat, endLong,
                riderName, driverName, driverVehicle
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(data.start_lat)
        .bind(data.start_long)
        .bind(data.end_lat)
        .bind(data.end_long)
        .bind(data.rider_name.as_str())
        .bind(data.driver_name.as_str())
        .bind(data.driver_vehicle.as_str())
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        // Read back inside the same transaction so generated columns are visible
        let row = sqlx::query_as::<_, RideRow>(
            r#"
            SELECT rideID AS ride_id, startLat AS start_lat, startLong AS start_long,
                   endLat AS end_lat, endLong AS end_long, riderName AS rider_name,
                   driverName AS driver_name, driverVehicle AS driver_vehicle, created
            FROM Rides
            WHERE rideID = ?
            "#,
        )
        .bind(ride_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Ride::from(row))
    }

    async fn find_page(&self, page: &PageRequest) -> Result<Vec<Ride>, RepositoryError> {
        let rows = sqlx::query_as::<_, RideRow>(
            r#"
            SELECT rideID AS ride_id, startLat AS start_lat, startLong AS start_long,
                   endLat AS end_lat, endLong AS end_long, riderName AS rider_name,
                   driverName AS driver_name, driverVehicle AS driver_vehicle, created
            FROM Rides
            ORDER BY rideID ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Ride::from).collect())
    }

    async fn find_by_id(&self, id: &RideId) -> Result<Option<Ride>, RepositoryError> {
        let row = sqlx::query_as::<_, RideRow>(
            r#"
            SELECT rideID AS ride_id, startLat AS start_lat, startLong AS start_long,
                   endLat AS end_lat, endLong AS end_long, riderName AS rider_name,
                   driverName AS driver_name, driverVehicle AS driver_vehicle, created
            FROM Rides
            WHERE rideID = ?
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Ride::from))
    }
}
