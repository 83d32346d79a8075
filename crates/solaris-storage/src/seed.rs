//! Reference catalog seed.
//!
//! Populates an empty catalog with the Sun, the eight planets and the tracked
//! comets/asteroids. Values keep the dataset's raw notation (comma decimal
//! separator, `⋅` multiplication dot); display normalization happens in the
//! chat layer.

use rusqlite::{params, Connection};
use tracing::info;

use solaris_core::error::SolarisError;

use crate::db::Database;

/// Sun row: surface area, volume, core temperature, mass, diameter.
const SUN: [&str; 5] = [
    "6,0877⋅10^18",
    "1,41⋅10^27",
    "1,57⋅10^7",
    "1,9885⋅10^30",
    "1,3927⋅10^9",
];

struct PlanetSeed {
    title: &'static str,
    satellite: Option<&'static str>,
    orbital_velocity: &'static str,
    rotation_period: &'static str,
    satellites_count: i64,
    planet_type: &'static str,
    weight: &'static str,
}

const PLANETS: [PlanetSeed; 8] = [
    PlanetSeed {
        title: "Меркурий",
        satellite: None,
        orbital_velocity: "47,36",
        rotation_period: "58,646",
        satellites_count: 0,
        planet_type: "планета земной группы",
        weight: "3,3011⋅10^23",
    },
    PlanetSeed {
        title: "Венера",
        satellite: None,
        orbital_velocity: "35,02",
        rotation_period: "243,023",
        satellites_count: 0,
        planet_type: "планета земной группы",
        weight: "4,8675⋅10^24",
    },
    PlanetSeed {
        title: "Земля",
        satellite: Some("Луна"),
        orbital_velocity: "29,78",
        rotation_period: "0,99727",
        satellites_count: 1,
        planet_type: "планета земной группы",
        weight: "5,9726⋅10^24",
    },
    PlanetSeed {
        title: "Марс",
        satellite: Some("Фобос"),
        orbital_velocity: "24,13",
        rotation_period: "1,02595",
        satellites_count: 2,
        planet_type: "планета земной группы",
        weight: "6,4171⋅10^23",
    },
    PlanetSeed {
        title: "Юпитер",
        satellite: Some("Ганимед"),
        orbital_velocity: "13,07",
        rotation_period: "0,41354",
        satellites_count: 95,
        planet_type: "газовый гигант",
        weight: "1,8986⋅10^27",
    },
    PlanetSeed {
        title: "Сатурн",
        satellite: Some("Титан"),
        orbital_velocity: "9,69",
        rotation_period: "0,44401",
        satellites_count: 146,
        planet_type: "газовый гигант",
        weight: "5,6846⋅10^26",
    },
    PlanetSeed {
        title: "Уран",
        satellite: Some("Титания"),
        orbital_velocity: "6,81",
        rotation_period: "0,71833",
        satellites_count: 28,
        planet_type: "ледяной гигант",
        weight: "8,6813⋅10^25",
    },
    PlanetSeed {
        title: "Нептун",
        satellite: Some("Тритон"),
        orbital_velocity: "5,43",
        rotation_period: "0,67125",
        satellites_count: 16,
        planet_type: "ледяной гигант",
        weight: "1,0243⋅10^26",
    },
];

/// (designation, kind, orbital period in years, observation arc in days)
const SMALL_BODIES: [(&str, &str, &str, &str); 3] = [
    ("C/2024 G3", "комета", "160 000", "437"),
    ("2022 YO1", "астероид", "1,91", "1 132"),
    ("2011 CQ1", "астероид", "0,94", "2"),
];

/// Insert the reference catalog if the Planets table is empty.
///
/// Returns `true` when rows were inserted.
pub fn seed_if_empty(db: &Database) -> Result<bool, SolarisError> {
    db.with_conn(|conn| {
        let planets: i64 = conn
            .query_row("SELECT COUNT(*) FROM Planets", [], |row| row.get(0))
            .map_err(|e| SolarisError::Storage(e.to_string()))?;
        if planets > 0 {
            return Ok(false);
        }
        insert_catalog(conn)?;
        info!(
            planets = PLANETS.len(),
            small_bodies = SMALL_BODIES.len(),
            "Reference catalog seeded"
        );
        Ok(true)
    })
}

fn insert_catalog(conn: &Connection) -> Result<(), SolarisError> {
    let storage_err = |e: rusqlite::Error| SolarisError::Storage(format!("Seed failed: {}", e));

    // Rolls back on drop unless committed.
    let tx = conn.unchecked_transaction().map_err(storage_err)?;

    tx.execute(
        r#"INSERT OR REPLACE INTO Sun
           ("id Sun", "surface area(m^2)", "volume(m^3)", "core temperature(K)", "weight(kg)", "diameter(m)")
           VALUES (1, ?1, ?2, ?3, ?4, ?5)"#,
        params![SUN[0], SUN[1], SUN[2], SUN[3], SUN[4]],
    )
    .map_err(storage_err)?;

    for planet in &PLANETS {
        tx.execute(
            "INSERT INTO Planets
             (satellite, title, orbital_velocity, rotation_period, satellites_count, type, weight)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                planet.satellite,
                planet.title,
                planet.orbital_velocity,
                planet.rotation_period,
                planet.satellites_count,
                planet.planet_type,
                planet.weight,
            ],
        )
        .map_err(storage_err)?;
    }

    for (title, kind, period, arc) in &SMALL_BODIES {
        tx.execute(
            "INSERT OR IGNORE INTO Small_Celestial_Bodies
             (kind, title, orbital_period, observation_arc)
             VALUES (?1, ?2, ?3, ?4)",
            params![kind, title, period, arc],
        )
        .map_err(storage_err)?;
    }

    tx.commit().map_err(storage_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solaris_core::types::{PLANET_NAMES, SMALL_BODY_DESIGNATIONS};

    fn count(db: &Database, table: &str) -> i64 {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        db.with_conn(|conn| {
            conn.query_row(&sql, [], |row| row.get(0))
                .map_err(|e| SolarisError::Storage(e.to_string()))
        })
        .unwrap()
    }

    #[test]
    fn test_seed_populates_empty_catalog() {
        let db = Database::in_memory().unwrap();
        assert!(seed_if_empty(&db).unwrap());
        assert_eq!(count(&db, "Sun"), 1);
        assert_eq!(count(&db, "Planets"), 8);
        assert_eq!(count(&db, "Small_Celestial_Bodies"), 3);
    }

    #[test]
    fn test_seed_is_noop_when_populated() {
        let db = Database::in_memory().unwrap();
        assert!(seed_if_empty(&db).unwrap());
        assert!(!seed_if_empty(&db).unwrap());
        assert_eq!(count(&db, "Planets"), 8);
    }

    #[test]
    fn test_seed_failure_rolls_back() {
        let db = Database::in_memory().unwrap();
        // Aborts the planet inserts partway through the seed.
        db.with_conn(|conn| {
            conn.execute_batch(
                "CREATE TRIGGER reject_mars BEFORE INSERT ON Planets
                 WHEN NEW.title = 'Марс'
                 BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
            )
            .map_err(|e| SolarisError::Storage(e.to_string()))
        })
        .unwrap();

        let err = seed_if_empty(&db).unwrap_err();
        assert!(err.to_string().contains("Seed failed"));
        assert_eq!(count(&db, "Sun"), 0);
        assert_eq!(count(&db, "Planets"), 0);

        // The connection is usable again after the rollback.
        db.with_conn(|conn| {
            conn.execute_batch("DROP TRIGGER reject_mars")
                .map_err(|e| SolarisError::Storage(e.to_string()))
        })
        .unwrap();
        assert!(seed_if_empty(&db).unwrap());
        assert_eq!(count(&db, "Planets"), 8);
    }

    #[test]
    fn test_seed_covers_canonical_keys() {
        let seeded: Vec<&str> = PLANETS.iter().map(|p| p.title).collect();
        assert_eq!(seeded, PLANET_NAMES.to_vec());

        let bodies: Vec<&str> = SMALL_BODIES.iter().map(|b| b.0).collect();
        assert_eq!(bodies, SMALL_BODY_DESIGNATIONS.to_vec());
    }
}
