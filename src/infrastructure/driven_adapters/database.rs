//! Database Connection Management
//!
//! Creates the SQLite connection pool and the `Rides` table.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use super::config::DatabaseConfig;

/// Create a SQLite connection pool from configuration
///
/// Every connection to an in-memory database opens a separate, empty
/// database, so in-memory URLs get a single connection that is never
/// recycled.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is malformed or the database cannot be opened.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    let pool_options = if is_in_memory(&config.url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
    };

    pool_options.connect_with(options).await
}

/// Create the `Rides` table if it does not exist yet
///
/// # Errors
///
/// Returns `sqlx::Error` if the statement fails.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS Rides (
            rideID INTEGER PRIMARY KEY AUTOINCREMENT,
            startLat REAL NOT NULL CHECK (startLat BETWEEN -90 AND 90),
            startLong REAL NOT NULL CHECK (startLong BETWEEN -180 AND 180),
            endLat REAL NOT NULL CHECK (endLat BETWEEN -90 AND 90),
            endLong REAL NOT NULL CHECK (endLong BETWEEN -180 AND 180),
            riderName TEXT NOT NULL CHECK (length(riderName) > 0),
            driverName TEXT NOT NULL CHECK (length(driverName) > 0),
            driverVehicle TEXT NOT NULL CHECK (length(driverVehicle) > 0),
            created DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::debug!("Rides table ready");
    Ok(())
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
