//! Database schema migrations.
//!
//! Applies the catalog schema: the singleton Sun table, the Planets table,
//! the Small_Celestial_Bodies table and the schema_migrations bookkeeping
//! table. Column names follow the published dataset, including the quoted
//! unit-suffixed Sun columns.

use rusqlite::Connection;
use tracing::info;

use solaris_core::error::SolarisError;

/// Run all pending database migrations.
pub fn run_migrations(conn: &Connection) -> Result<(), SolarisError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version     INTEGER PRIMARY KEY NOT NULL,
            name        TEXT NOT NULL,
            applied_at  INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );",
    )
    .map_err(|e| SolarisError::Storage(format!("Failed to create migrations table: {}", e)))?;

    let current_version: i64 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .map_err(|e| SolarisError::Storage(format!("Failed to query migration version: {}", e)))?;

    if current_version < 1 {
        apply_v1(conn)?;
        info!("Applied migration v1: catalog_schema");
    }

    Ok(())
}

/// Version 1: catalog schema.
///
/// Attribute columns are untyped so that an externally populated catalog may
/// store numbers either as text ("1,989⋅10^30") or as INTEGER/REAL.
fn apply_v1(conn: &Connection) -> Result<(), SolarisError> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS Sun (
            "id Sun"                INTEGER PRIMARY KEY NOT NULL,
            "surface area(m^2)",
            "volume(m^3)",
            "core temperature(K)",
            "weight(kg)",
            "diameter(m)"
        );

        CREATE TABLE IF NOT EXISTS Planets (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            satellite           TEXT,
            title               TEXT NOT NULL UNIQUE,
            orbital_velocity,
            rotation_period,
            satellites_count,
            type,
            weight
        );

        CREATE TABLE IF NOT EXISTS Small_Celestial_Bodies (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            kind                TEXT,
            title               TEXT NOT NULL UNIQUE,
            orbital_period,
            observation_arc
        );

        INSERT OR IGNORE INTO schema_migrations (version, name) VALUES (1, 'catalog_schema');
        "#,
    )
    .map_err(|e| SolarisError::Storage(format!("Failed to apply migration v1: {}", e)))?;

    Ok(())
}
