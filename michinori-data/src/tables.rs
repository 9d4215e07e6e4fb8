//! CSV loaders for the location masters and the distance matrix.
//!
//! Three tables feed the service at startup: the tourist-spot master
//! (keyed by facility ID), the station master (keyed by station name) and
//! the precomputed distance matrix. The masters keep their original
//! Japanese headers so the exported files load unmodified.
//!
//! Loading is tolerant: a row missing its coordinates or failing to decode
//! is skipped with a warning rather than aborting the merge, so one bad
//! export line cannot take the service down.

use std::io::Read;

use camino::{Utf8Path, Utf8PathBuf};
use geo::Coord;
use michinori_core::{DurationRecord, LocationRecord};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::fs;

/// Errors returned when loading a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The table file could not be opened or read.
    #[error("failed to open table at {path:?}")]
    Open {
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
        /// Path that failed to open.
        path: Utf8PathBuf,
    },
    /// The table could not be read as CSV at all.
    #[error("failed to read table rows")]
    Csv {
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
}

/// One row of the tourist-spot master.
#[derive(Debug, Deserialize)]
struct SpotRow {
    #[serde(rename = "施設ID")]
    id: String,
    #[serde(rename = "緯度")]
    latitude: Option<f64>,
    #[serde(rename = "経度")]
    longitude: Option<f64>,
}

/// One row of the station master.
#[derive(Debug, Deserialize)]
struct StationRow {
    #[serde(rename = "駅名")]
    name: String,
    #[serde(rename = "緯度")]
    latitude: Option<f64>,
    #[serde(rename = "経度")]
    longitude: Option<f64>,
}

/// One row of the distance matrix; auxiliary columns are ignored.
#[derive(Debug, Deserialize)]
struct DurationRow {
    from_id: String,
    to_id: String,
    driving_minutes: Option<f64>,
}

/// Read the tourist-spot master from a CSV source.
///
/// # Errors
///
/// Returns [`TableError::Csv`] only for I/O-level failures; malformed rows
/// are skipped with a warning.
pub fn read_spot_locations<R: Read>(reader: R) -> Result<Vec<LocationRecord>, TableError> {
    collect_rows(reader, |row: SpotRow| {
        location_from_parts("spot", &row.id, row.latitude, row.longitude)
    })
}

/// Read the station master from a CSV source.
///
/// # Errors
///
/// Returns [`TableError::Csv`] only for I/O-level failures; malformed rows
/// are skipped with a warning.
pub fn read_station_locations<R: Read>(reader: R) -> Result<Vec<LocationRecord>, TableError> {
    collect_rows(reader, |row: StationRow| {
        location_from_parts("station", &row.name, row.latitude, row.longitude)
    })
}

/// Read the distance matrix from a CSV source.
///
/// A blank `driving_minutes` cell is kept as an absent value rather than
/// dropped: the pair is still considered precomputed.
///
/// # Errors
///
/// Returns [`TableError::Csv`] only for I/O-level failures; malformed rows
/// are skipped with a warning.
pub fn read_duration_records<R: Read>(reader: R) -> Result<Vec<DurationRecord>, TableError> {
    collect_rows(reader, |row: DurationRow| {
        if row.from_id.is_empty() || row.to_id.is_empty() {
            log::warn!("skipping distance matrix row with a blank identifier");
            return None;
        }
        Some(DurationRecord {
            from_id: row.from_id,
            to_id: row.to_id,
            driving_minutes: row.driving_minutes,
        })
    })
}

/// Load the tourist-spot master from disk, tolerating a UTF-8 BOM.
///
/// # Errors
///
/// Returns [`TableError::Open`] when the file cannot be read and
/// [`TableError::Csv`] when the content is not readable as CSV.
pub fn load_spot_locations(path: &Utf8Path) -> Result<Vec<LocationRecord>, TableError> {
    read_spot_locations(open_table(path)?.as_bytes())
}

/// Load the station master from disk, tolerating a UTF-8 BOM.
///
/// # Errors
///
/// Returns [`TableError::Open`] when the file cannot be read and
/// [`TableError::Csv`] when the content is not readable as CSV.
pub fn load_station_locations(path: &Utf8Path) -> Result<Vec<LocationRecord>, TableError> {
    read_station_locations(open_table(path)?.as_bytes())
}

/// Load the distance matrix from disk, tolerating a UTF-8 BOM.
///
/// # Errors
///
/// Returns [`TableError::Open`] when the file cannot be read and
/// [`TableError::Csv`] when the content is not readable as CSV.
pub fn load_duration_records(path: &Utf8Path) -> Result<Vec<DurationRecord>, TableError> {
    read_duration_records(open_table(path)?.as_bytes())
}

fn open_table(path: &Utf8Path) -> Result<String, TableError> {
    fs::read_table_text(path).map_err(|source| TableError::Open {
        source,
        path: path.to_owned(),
    })
}

/// Deserialise every row, mapping each through `convert` and skipping rows
/// that fail to decode. Field values and headers are whitespace-trimmed so
/// identifiers key the registry consistently.
fn collect_rows<R, Row, T>(
    reader: R,
    convert: impl Fn(Row) -> Option<T>,
) -> Result<Vec<T>, TableError>
where
    R: Read,
    Row: DeserializeOwned,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<Row>() {
        match record {
            Ok(row) => {
                if let Some(value) = convert(row) {
                    rows.push(value);
                }
            }
            Err(source) if matches!(source.kind(), csv::ErrorKind::Io(_)) => {
                return Err(TableError::Csv { source });
            }
            Err(source) => {
                log::warn!("skipping undecodable table row: {source}");
            }
        }
    }
    Ok(rows)
}

fn location_from_parts(
    table: &str,
    id: &str,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Option<LocationRecord> {
    let (Some(lat), Some(lon)) = (latitude, longitude) else {
        log::warn!("skipping {table} row {id:?} without coordinates");
        return None;
    };
    match LocationRecord::new(id, Coord { x: lon, y: lat }) {
        Ok(record) => Some(record),
        Err(err) => {
            log::warn!("skipping {table} row: {err}");
            None
        }
    }
}
