//! Identifier to coordinate lookup merged from the two master tables.

use std::collections::HashMap;

use geo::Coord;

use crate::LocationRecord;

/// Read-only mapping from location identifier to coordinate.
///
/// The registry is built once at startup by merging the station master over
/// the spot master: spot records are inserted first, station records after,
/// so a station entry wins whenever both sources use the same identifier.
/// There is no mutation API; request handling only reads.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use michinori_core::{CoordinateRegistry, LocationRecord};
///
/// # fn main() -> Result<(), michinori_core::LocationRecordError> {
/// let spots = vec![LocationRecord::new("S001", Coord { x: 135.5, y: 34.7 })?];
/// let stations = vec![LocationRecord::new("大阪駅", Coord { x: 135.49, y: 34.70 })?];
/// let registry = CoordinateRegistry::from_sources(spots, stations);
/// assert!(registry.lookup("S001").is_some());
/// assert!(registry.lookup("京都駅").is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoordinateRegistry {
    entries: HashMap<String, Coord>,
}

impl CoordinateRegistry {
    /// Merge the two location sources into a registry.
    ///
    /// `stations` is inserted after `spots`, so station-sourced coordinates
    /// override spot-sourced ones on identifier collision.
    #[must_use]
    pub fn from_sources(
        spots: impl IntoIterator<Item = LocationRecord>,
        stations: impl IntoIterator<Item = LocationRecord>,
    ) -> Self {
        let mut entries = HashMap::new();
        for record in spots.into_iter().chain(stations) {
            entries.insert(record.id, record.location);
        }
        Self { entries }
    }

    /// Look up the coordinate for an identifier.
    ///
    /// The query is trimmed of surrounding whitespace to mirror the
    /// trimming applied when the registry was built.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<Coord> {
        self.entries.get(id.trim()).copied()
    }

    /// Number of distinct identifiers in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn record(id: &str, lon: f64, lat: f64) -> LocationRecord {
        LocationRecord::new(id, Coord { x: lon, y: lat }).expect("valid identifier")
    }

    #[fixture]
    fn registry() -> CoordinateRegistry {
        let spots = vec![record("S001", 135.50, 34.70), record("shared", 1.0, 1.0)];
        let stations = vec![record("大阪駅", 135.49, 34.70), record("shared", 2.0, 2.0)];
        CoordinateRegistry::from_sources(spots, stations)
    }

    #[rstest]
    fn station_overrides_spot_on_collision(registry: CoordinateRegistry) {
        let coord = registry.lookup("shared").expect("shared id should resolve");
        assert_eq!(coord, Coord { x: 2.0, y: 2.0 });
    }

    #[rstest]
    fn resolves_entries_from_both_sources(registry: CoordinateRegistry) {
        assert!(registry.lookup("S001").is_some());
        assert!(registry.lookup("大阪駅").is_some());
        assert_eq!(registry.len(), 3);
    }

    #[rstest]
    fn lookup_trims_the_query(registry: CoordinateRegistry) {
        assert_eq!(registry.lookup(" S001 "), registry.lookup("S001"));
    }

    #[rstest]
    fn unknown_identifier_is_absent(registry: CoordinateRegistry) {
        assert!(registry.lookup("missing").is_none());
    }

    #[rstest]
    fn empty_sources_yield_empty_registry() {
        let registry = CoordinateRegistry::from_sources(Vec::new(), Vec::new());
        assert!(registry.is_empty());
    }
}
