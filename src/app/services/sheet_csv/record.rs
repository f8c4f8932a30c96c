//! Per-row marker record assembly
//!
//! Each data row either becomes a validated [`MarkerRecord`] or a
//! [`RowDefect`] that the pipeline maps to a skip. Only the coordinate cell
//! can fail a row; every other field degrades to a documented default.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::columns::{ColumnMap, optional_cell};
use super::coordinates::{CoordinateError, parse_coordinates};
use crate::app::models::{CoordinateNotation, MarkerRecord};
use crate::constants::{
    CATEGORY_TAG_DELIMITER, DEFAULT_MARKER_SCALE, EXTERNAL_LINK_PLACEHOLDER,
    TIMESTAMP_DATE_FORMATS, TIMESTAMP_DATETIME_FORMATS, UNNAMED_MARKER_PLACEHOLDER,
};

/// Why a single data row was discarded
///
/// A defect never propagates past the row boundary; the pipeline counts it
/// and moves on.
#[derive(thiserror::Error, Debug)]
pub enum RowDefect {
    /// The coordinate cell is empty or the row is too short to contain it
    #[error("coordinate cell is empty or missing")]
    MissingCoordinate,

    /// The coordinate cell did not normalize in either notation
    #[error("coordinate parse failed: {0}")]
    Coordinate(#[from] CoordinateError),

    /// Assembled record failed validation
    #[error("record validation failed: {0}")]
    Validation(String),
}

/// A built record, tagged with the coordinate notation that matched
#[derive(Debug, Clone)]
pub struct BuiltMarker {
    pub record: MarkerRecord,
    pub notation: CoordinateNotation,
}

/// Assemble a marker record from one tokenized data row
pub fn build_marker_record(
    fields: &[String],
    columns: &ColumnMap,
) -> Result<BuiltMarker, RowDefect> {
    let coordinate_cell = optional_cell(fields, Some(columns.coordinates))
        .ok_or(RowDefect::MissingCoordinate)?;

    let parsed = parse_coordinates(coordinate_cell)?;

    let name = optional_cell(fields, Some(columns.name))
        .unwrap_or(UNNAMED_MARKER_PLACEHOLDER)
        .to_string();

    let description = optional_cell(fields, columns.description)
        .unwrap_or_default()
        .to_string();

    let external_link = optional_cell(fields, columns.external_link)
        .unwrap_or(EXTERNAL_LINK_PLACEHOLDER)
        .to_string();

    let scale = parse_scale_cell(optional_cell(fields, columns.scale));

    let category_tag = optional_cell(fields, columns.category).map(parse_category_cell);

    let submitted_at =
        optional_cell(fields, columns.timestamp).and_then(parse_timestamp_cell);

    let record = MarkerRecord::new(
        name,
        description,
        parsed.coordinate,
        external_link,
        scale,
        category_tag,
        submitted_at,
    )
    .map_err(|error| RowDefect::Validation(error.to_string()))?;

    Ok(BuiltMarker {
        record,
        notation: parsed.notation,
    })
}

/// Parse the scale cell, falling back to the default for absent, unparsable,
/// or non-positive values
pub fn parse_scale_cell(cell: Option<&str>) -> f64 {
    cell.and_then(|value| value.parse::<f64>().ok())
        .filter(|parsed| parsed.is_finite() && *parsed > 0.0)
        .unwrap_or(DEFAULT_MARKER_SCALE)
}

/// Extract the category tag from a cell of the form `<tag> - <description>`
///
/// Cells without the delimiter are kept whole; unknown tags are preserved
/// verbatim rather than rejected.
pub fn parse_category_cell(cell: &str) -> String {
    match cell.split_once(CATEGORY_TAG_DELIMITER) {
        Some((tag, _description)) => tag.trim().to_string(),
        None => cell.trim().to_string(),
    }
}

/// Best-effort timestamp parsing against the explicit format allowlist
///
/// Tries RFC 3339 first, then the date-time formats, then the date-only
/// formats (interpreted as midnight UTC). Anything else yields `None` rather
/// than failing the row.
pub fn parse_timestamp_cell(cell: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(cell) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in TIMESTAMP_DATETIME_FORMATS {
        if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(cell, format) {
            return Some(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
        }
    }

    for format in TIMESTAMP_DATE_FORMATS {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(cell, format) {
            let naive = date.and_hms_opt(0, 0, 0)?;
            return Some(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
        }
    }

    debug!("Unparsable timestamp cell '{}', leaving submitted_at unset", cell);
    None
}
