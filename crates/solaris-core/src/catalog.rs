//! Read-only access to the astronomical catalog.

use crate::error::Result;
use crate::types::{PlanetRecord, SmallBodyRecord, SunRecord};

/// Data access gateway over the persisted catalog.
///
/// Lookups are case-sensitive on the canonical key. A missing row is
/// `Ok(None)`; `Err` is reserved for the backing store failing.
pub trait CatalogGateway: Send + Sync {
    /// Fetch the singleton Sun row.
    fn fetch_sun(&self) -> Result<Option<SunRecord>>;

    /// Fetch a planet by canonical name.
    fn fetch_planet(&self, name: &str) -> Result<Option<PlanetRecord>>;

    /// Fetch a comet or asteroid by canonical designation.
    fn fetch_small_body(&self, designation: &str) -> Result<Option<SmallBodyRecord>>;
}
