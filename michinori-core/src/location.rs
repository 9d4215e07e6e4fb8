//! Named locations fed into the coordinate registry.

use geo::Coord;
use thiserror::Error;

/// A named location sourced from one of the master tables.
///
/// The identifier is externally assigned and opaque: a facility ID for
/// tourist spots, a station name for transit stations. Surrounding
/// whitespace is stripped on construction so that both sources key the
/// registry consistently.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use michinori_core::LocationRecord;
///
/// # fn main() -> Result<(), michinori_core::LocationRecordError> {
/// let record = LocationRecord::new(" S001 ", Coord { x: 135.5, y: 34.7 })?;
/// assert_eq!(record.id, "S001");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    /// Trimmed, externally assigned identifier.
    pub id: String,
    /// Geospatial position; `x` is longitude, `y` is latitude.
    pub location: Coord,
}

/// Errors returned by [`LocationRecord::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationRecordError {
    /// The identifier was empty once trimmed.
    #[error("location identifier must not be empty")]
    EmptyIdentifier,
}

impl LocationRecord {
    /// Validates and constructs a [`LocationRecord`], trimming the identifier.
    pub fn new(id: impl Into<String>, location: Coord) -> Result<Self, LocationRecordError> {
        let id = id.into().trim().to_owned();
        if id.is_empty() {
            return Err(LocationRecordError::EmptyIdentifier);
        }
        Ok(Self { id, location })
    }
}
