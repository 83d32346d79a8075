//! SQLite-backed catalog gateway.
//!
//! Every lookup is a fixed parameterized statement. Attribute columns are
//! untyped, so the SELECTs cast them to TEXT and SQLite renders INTEGER and
//! REAL values in its own notation (`95`, `24.0`, `1.9885e+30`). NULL stays
//! `None`.

use std::sync::Arc;

use rusqlite::Row;
use tracing::debug;

use solaris_core::catalog::CatalogGateway;
use solaris_core::error::SolarisError;
use solaris_core::types::{PlanetRecord, SmallBodyRecord, SunRecord};

use crate::db::Database;

/// Catalog gateway over the Sun, Planets and Small_Celestial_Bodies tables.
pub struct CatalogRepository {
    db: Arc<Database>,
}

impl CatalogRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

impl CatalogGateway for CatalogRepository {
    fn fetch_sun(&self) -> Result<Option<SunRecord>, SolarisError> {
        self.db.with_conn(|conn| {
            conn.query_row(
                r#"SELECT CAST("surface area(m^2)" AS TEXT), CAST("volume(m^3)" AS TEXT),
                          CAST("core temperature(K)" AS TEXT), CAST("weight(kg)" AS TEXT),
                          CAST("diameter(m)" AS TEXT)
                   FROM Sun ORDER BY "id Sun" LIMIT 1"#,
                [],
                |row| {
                    Ok(SunRecord {
                        surface_area: column_text(row, 0)?,
                        volume: column_text(row, 1)?,
                        core_temperature: column_text(row, 2)?,
                        mass: column_text(row, 3)?,
                        diameter: column_text(row, 4)?,
                    })
                },
            )
            .optional()
            .map_err(|e| SolarisError::Storage(format!("Failed to fetch Sun: {}", e)))
        })
    }

    fn fetch_planet(&self, name: &str) -> Result<Option<PlanetRecord>, SolarisError> {
        debug!(planet = name, "Catalog lookup");
        self.db.with_conn(|conn| {
            conn.query_row(
                "SELECT title, CAST(satellite AS TEXT), CAST(orbital_velocity AS TEXT),
                        CAST(rotation_period AS TEXT), CAST(satellites_count AS TEXT),
                        CAST(type AS TEXT), CAST(weight AS TEXT)
                 FROM Planets WHERE title = ?1",
                rusqlite::params![name],
                |row| {
                    Ok(PlanetRecord {
                        name: row.get(0)?,
                        satellite: column_text(row, 1)?,
                        orbital_velocity: column_text(row, 2)?,
                        rotation_period: column_text(row, 3)?,
                        moon_count: column_text(row, 4)?,
                        planet_type: column_text(row, 5)?,
                        mass: column_text(row, 6)?,
                    })
                },
            )
            .optional()
            .map_err(|e| SolarisError::Storage(format!("Failed to fetch planet: {}", e)))
        })
    }

    fn fetch_small_body(&self, designation: &str) -> Result<Option<SmallBodyRecord>, SolarisError> {
        debug!(designation, "Catalog lookup");
        self.db.with_conn(|conn| {
            conn.query_row(
                "SELECT title, CAST(kind AS TEXT), CAST(orbital_period AS TEXT),
                        CAST(observation_arc AS TEXT)
                 FROM Small_Celestial_Bodies WHERE title = ?1",
                rusqlite::params![designation],
                |row| {
                    Ok(SmallBodyRecord {
                        designation: row.get(0)?,
                        kind: column_text(row, 1)?,
                        orbital_period: column_text(row, 2)?,
                        observation_arc: column_text(row, 3)?,
                    })
                },
            )
            .optional()
            .map_err(|e| SolarisError::Storage(format!("Failed to fetch small body: {}", e)))
        })
    }
}

/// Read a column cast to TEXT, `None` for NULL.
fn column_text(row: &Row<'_>, idx: usize) -> Result<Option<String>, rusqlite::Error> {
    row.get::<_, Option<String>>(idx)
}

/// Extension trait to convert rusqlite "no rows" errors into `Ok(None)`.
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error>;
}

impl<T> OptionalExt<T> for Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_if_empty;

    fn make_repo() -> (Arc<Database>, CatalogRepository) {
        let db = Arc::new(Database::in_memory().unwrap());
        (db.clone(), CatalogRepository::new(db))
    }

    fn seeded_repo() -> CatalogRepository {
        let (db, repo) = make_repo();
        seed_if_empty(&db).unwrap();
        repo
    }

    fn exec(db: &Database, sql: &str) {
        db.with_conn(|conn| {
            conn.execute_batch(sql)
                .map_err(|e| SolarisError::Storage(e.to_string()))
        })
        .unwrap();
    }

    // ========================================================================
    // Sun
    // ========================================================================

    #[test]
    fn test_fetch_sun_empty_catalog() {
        let (_db, repo) = make_repo();
        assert!(repo.fetch_sun().unwrap().is_none());
    }

    #[test]
    fn test_fetch_sun_seeded() {
        let repo = seeded_repo();
        let sun = repo.fetch_sun().unwrap().unwrap();
        assert_eq!(sun.diameter.as_deref(), Some("1,3927⋅10^9"));
        assert!(sun.mass.is_some());
    }

    #[test]
    fn test_fetch_sun_null_column() {
        let (db, repo) = make_repo();
        exec(
            &db,
            r#"INSERT INTO Sun ("id Sun", "volume(m^3)") VALUES (1, '1,41⋅10^27')"#,
        );
        let sun = repo.fetch_sun().unwrap().unwrap();
        assert_eq!(sun.volume.as_deref(), Some("1,41⋅10^27"));
        assert!(sun.diameter.is_none());
    }

    #[test]
    fn test_fetch_sun_real_columns_keep_sqlite_notation() {
        let (db, repo) = make_repo();
        exec(
            &db,
            r#"INSERT INTO Sun ("id Sun", "weight(kg)", "diameter(m)", "volume(m^3)")
               VALUES (1, 1.9885e30, 24.0, 1412)"#,
        );
        let sun = repo.fetch_sun().unwrap().unwrap();
        assert_eq!(sun.mass.as_deref(), Some("1.9885e+30"));
        assert_eq!(sun.diameter.as_deref(), Some("24.0"));
        assert_eq!(sun.volume.as_deref(), Some("1412"));
    }

    // ========================================================================
    // Planets
    // ========================================================================

    #[test]
    fn test_fetch_planet_by_canonical_name() {
        let repo = seeded_repo();
        let earth = repo.fetch_planet("Земля").unwrap().unwrap();
        assert_eq!(earth.name, "Земля");
        assert_eq!(earth.mass.as_deref(), Some("5,9726⋅10^24"));
        assert_eq!(earth.satellite.as_deref(), Some("Луна"));
    }

    #[test]
    fn test_fetch_planet_integer_column_rendered() {
        let repo = seeded_repo();
        let jupiter = repo.fetch_planet("Юпитер").unwrap().unwrap();
        assert_eq!(jupiter.moon_count.as_deref(), Some("95"));

        let mercury = repo.fetch_planet("Меркурий").unwrap().unwrap();
        assert_eq!(mercury.moon_count.as_deref(), Some("0"));
    }

    #[test]
    fn test_fetch_planet_real_column_rendered() {
        let (db, repo) = make_repo();
        exec(
            &db,
            "INSERT INTO Planets (title, orbital_velocity) VALUES ('Марс', 24.13)",
        );
        let mars = repo.fetch_planet("Марс").unwrap().unwrap();
        assert_eq!(mars.orbital_velocity.as_deref(), Some("24.13"));
        assert!(mars.mass.is_none());
    }

    #[test]
    fn test_fetch_planet_unknown() {
        let repo = seeded_repo();
        assert!(repo.fetch_planet("Плутон").unwrap().is_none());
    }

    #[test]
    fn test_fetch_planet_is_case_sensitive() {
        let repo = seeded_repo();
        assert!(repo.fetch_planet("земля").unwrap().is_none());
    }

    // ========================================================================
    // Small bodies
    // ========================================================================

    #[test]
    fn test_fetch_small_body() {
        let repo = seeded_repo();
        let comet = repo.fetch_small_body("C/2024 G3").unwrap().unwrap();
        assert_eq!(comet.designation, "C/2024 G3");
        assert_eq!(comet.kind.as_deref(), Some("комета"));
        assert!(comet.orbital_period.is_some());
        assert!(comet.observation_arc.is_some());
    }

    #[test]
    fn test_fetch_small_body_unknown() {
        let repo = seeded_repo();
        assert!(repo.fetch_small_body("1P/Halley").unwrap().is_none());
    }

    #[test]
    fn test_gateway_usable_as_trait_object() {
        let gateway: Arc<dyn CatalogGateway> = Arc::new(seeded_repo());
        assert!(gateway.fetch_planet("Нептун").unwrap().is_some());
    }
}
