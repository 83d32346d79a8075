use serde::{Deserialize, Serialize};

// =============================================================================
// Canonical keys
// =============================================================================

/// Canonical planet names in fixed enumeration order (Mercury..Neptune).
pub const PLANET_NAMES: [&str; 8] = [
    "Меркурий", "Венера", "Земля", "Марс", "Юпитер", "Сатурн", "Уран", "Нептун",
];

/// Canonical small-body designations in fixed enumeration order.
pub const SMALL_BODY_DESIGNATIONS: [&str; 3] = ["C/2024 G3", "2022 YO1", "2011 CQ1"];

// =============================================================================
// Enums
// =============================================================================

/// Kind of subject a session can be anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    Sun,
    Planet,
    SmallBody,
}

/// Stored attributes of the Sun.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SunAttribute {
    /// Surface area, m².
    SurfaceArea,
    /// Volume, m³.
    Volume,
    /// Core temperature, K.
    CoreTemperature,
    /// Mass, kg.
    Mass,
    /// Diameter, m.
    Diameter,
}

/// Stored attributes of a planet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetAttribute {
    /// Orbital velocity, km/s.
    OrbitalVelocity,
    /// Rotation period, days.
    RotationPeriod,
    MoonCount,
    /// Classification string, e.g. "газовый гигант".
    Type,
    /// Mass, kg.
    Mass,
}

/// Stored attributes of a comet or asteroid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmallBodyAttribute {
    /// Orbital period, years.
    OrbitalPeriod,
    /// Observation-arc duration, days.
    ObservationArc,
}

// =============================================================================
// Catalog records
// =============================================================================

/// The singleton Sun row. Values are raw stored text; `None` means NULL.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunRecord {
    pub surface_area: Option<String>,
    pub volume: Option<String>,
    pub core_temperature: Option<String>,
    pub mass: Option<String>,
    pub diameter: Option<String>,
}

impl SunRecord {
    /// Raw stored value of one attribute.
    pub fn value(&self, attribute: SunAttribute) -> Option<&str> {
        match attribute {
            SunAttribute::SurfaceArea => self.surface_area.as_deref(),
            SunAttribute::Volume => self.volume.as_deref(),
            SunAttribute::CoreTemperature => self.core_temperature.as_deref(),
            SunAttribute::Mass => self.mass.as_deref(),
            SunAttribute::Diameter => self.diameter.as_deref(),
        }
    }
}

/// A planet row keyed by its canonical name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetRecord {
    pub name: String,
    /// One notable satellite, if the planet has any.
    pub satellite: Option<String>,
    pub orbital_velocity: Option<String>,
    pub rotation_period: Option<String>,
    pub moon_count: Option<String>,
    pub planet_type: Option<String>,
    pub mass: Option<String>,
}

impl PlanetRecord {
    pub fn value(&self, attribute: PlanetAttribute) -> Option<&str> {
        match attribute {
            PlanetAttribute::OrbitalVelocity => self.orbital_velocity.as_deref(),
            PlanetAttribute::RotationPeriod => self.rotation_period.as_deref(),
            PlanetAttribute::MoonCount => self.moon_count.as_deref(),
            PlanetAttribute::Type => self.planet_type.as_deref(),
            PlanetAttribute::Mass => self.mass.as_deref(),
        }
    }
}

/// A comet or asteroid row keyed by its canonical designation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmallBodyRecord {
    pub designation: String,
    /// "комета" or "астероид".
    pub kind: Option<String>,
    pub orbital_period: Option<String>,
    pub observation_arc: Option<String>,
}

impl SmallBodyRecord {
    pub fn value(&self, attribute: SmallBodyAttribute) -> Option<&str> {
        match attribute {
            SmallBodyAttribute::OrbitalPeriod => self.orbital_period.as_deref(),
            SmallBodyAttribute::ObservationArc => self.observation_arc.as_deref(),
        }
    }
}
