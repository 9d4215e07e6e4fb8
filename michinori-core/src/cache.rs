//! Precomputed duration lookup keyed by ordered identifier pairs.

use std::collections::HashMap;

/// One row of the precomputed distance matrix.
///
/// `driving_minutes` is `None` when the backing table has a blank cell for
/// the pair; the row still counts as a cache hit and the absent value is
/// returned verbatim. Auxiliary columns of the table are not modelled.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationRecord {
    /// Identifier of the origin location.
    pub from_id: String,
    /// Identifier of the destination location.
    pub to_id: String,
    /// Stored driving time in minutes, possibly fractional or absent.
    pub driving_minutes: Option<f64>,
}

/// The stored value behind a cache hit.
///
/// Cached values are trusted verbatim: no rounding is applied and a blank
/// cell is surfaced as `None` rather than treated as a miss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CachedDuration {
    /// Driving time in minutes exactly as stored.
    pub minutes: Option<f64>,
}

/// Immutable table of precomputed (from, to) durations.
///
/// Lookups are exact matches on the ordered pair: `A -> B` and `B -> A` are
/// distinct rows and either may be missing. The table is loaded fully into
/// memory at startup and never mutated by request traffic; refreshing it is
/// an offline concern.
#[derive(Debug, Clone, Default)]
pub struct DurationCache {
    rows: HashMap<(String, String), Option<f64>>,
}

impl DurationCache {
    /// Build the cache from duration records.
    ///
    /// Identifiers are trimmed to match registry keying. When the same
    /// ordered pair appears twice, the later row wins.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = DurationRecord>) -> Self {
        let mut rows = HashMap::new();
        for record in records {
            let key = (
                record.from_id.trim().to_owned(),
                record.to_id.trim().to_owned(),
            );
            rows.insert(key, record.driving_minutes);
        }
        Self { rows }
    }

    /// Look up the stored duration for an ordered identifier pair.
    ///
    /// Returns `None` when no row exists for the pair; a row with a blank
    /// minutes cell returns `Some(CachedDuration { minutes: None })`.
    #[must_use]
    pub fn lookup(&self, from_id: &str, to_id: &str) -> Option<CachedDuration> {
        self.rows
            .get(&(from_id.trim().to_owned(), to_id.trim().to_owned()))
            .map(|minutes| CachedDuration { minutes: *minutes })
    }

    /// Number of cached pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the cache holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn row(from_id: &str, to_id: &str, minutes: Option<f64>) -> DurationRecord {
        DurationRecord {
            from_id: from_id.to_owned(),
            to_id: to_id.to_owned(),
            driving_minutes: minutes,
        }
    }

    #[fixture]
    fn cache() -> DurationCache {
        DurationCache::from_records(vec![
            row("A", "B", Some(25.0)),
            row("B", "A", Some(30.0)),
            row("A", "C", Some(12.5)),
            row("C", "A", None),
        ])
    }

    #[rstest]
    fn exact_pair_returns_stored_minutes(cache: DurationCache) {
        let hit = cache.lookup("A", "B").expect("pair should be cached");
        assert_eq!(hit.minutes, Some(25.0));
    }

    #[rstest]
    fn direction_matters(cache: DurationCache) {
        assert_eq!(cache.lookup("B", "A").and_then(|hit| hit.minutes), Some(30.0));
        assert!(cache.lookup("B", "C").is_none());
    }

    #[rstest]
    fn fractional_minutes_survive_verbatim(cache: DurationCache) {
        assert_eq!(cache.lookup("A", "C").and_then(|hit| hit.minutes), Some(12.5));
    }

    #[rstest]
    fn blank_cell_is_a_hit_without_a_value(cache: DurationCache) {
        let hit = cache.lookup("C", "A").expect("row exists despite blank cell");
        assert_eq!(hit.minutes, None);
    }

    #[rstest]
    fn identifiers_are_trimmed(cache: DurationCache) {
        assert!(cache.lookup(" A ", "B ").is_some());
    }

    #[rstest]
    fn later_duplicate_row_wins() {
        let cache = DurationCache::from_records(vec![
            row("A", "B", Some(10.0)),
            row("A", "B", Some(20.0)),
        ]);
        assert_eq!(cache.lookup("A", "B").and_then(|hit| hit.minutes), Some(20.0));
        assert_eq!(cache.len(), 1);
    }
}
