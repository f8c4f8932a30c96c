//! Coordinate normalization for marker submissions
//!
//! Submitters paste coordinates in whatever form their map app produces, in
//! practice one of two notations:
//!
//! - decimal degrees as `latitude, longitude`, e.g. `41.688752, 44.796152`
//! - degrees/minutes/seconds with hemisphere letters,
//!   e.g. `41°42'26.1"N 44°46'29.7"E`
//!
//! Both normalize to the canonical [`LngLat`] pair. Decimal is tried first;
//! DMS only when decimal parsing fails. Note the output order is swapped
//! relative to the input: sources write latitude first, the canonical pair is
//! (longitude, latitude).

use crate::app::models::{CoordinateNotation, LngLat};
use crate::constants::{LATITUDE_RANGE, LONGITUDE_RANGE};
use regex::Regex;
use std::sync::LazyLock;

/// Pattern of one DMS token: `41°42'26.1"N` (quotes are stripped beforehand)
static DMS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)°(\d+)'([\d.]+)([NSEW])$").expect("valid DMS pattern"));

/// A coordinate cell that could not be normalized
///
/// This is an explicit per-row failure value, not a document error: the
/// caller's policy is to skip the record, never to abort the ingestion run.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// The cell did not split into exactly two parts
    #[error("expected two coordinate parts")]
    MalformedPair,

    /// A decimal part failed numeric parsing
    #[error("'{value}' is not a finite number")]
    NotANumber { value: String },

    /// Parsed values fall outside geographic bounds
    #[error("({lat}, {lon}) is outside geographic bounds")]
    OutOfRange { lat: f64, lon: f64 },

    /// A token did not match degrees°minutes'seconds hemisphere notation
    #[error("'{token}' is not a recognized coordinate notation")]
    MalformedDmsToken { token: String },
}

/// A successfully normalized coordinate, tagged with the notation that matched
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedCoordinate {
    pub coordinate: LngLat,
    pub notation: CoordinateNotation,
}

/// Normalize a coordinate-bearing string into a canonical (lon, lat) pair
///
/// Decimal notation wins when it parses; DMS is the fallback. An in-range
/// failure of the decimal parser (e.g. `200, 10`) is reported as such rather
/// than being masked by the DMS attempt.
pub fn parse_coordinates(raw: &str) -> Result<ParsedCoordinate, CoordinateError> {
    let decimal_error = match parse_decimal(raw) {
        Ok(coordinate) => {
            return Ok(ParsedCoordinate {
                coordinate,
                notation: CoordinateNotation::Decimal,
            });
        }
        Err(error) => error,
    };

    match parse_dms(raw) {
        Ok(coordinate) => Ok(ParsedCoordinate {
            coordinate,
            notation: CoordinateNotation::Dms,
        }),
        Err(dms_error) => {
            // The range failure carries more information than "not DMS"
            if matches!(decimal_error, CoordinateError::OutOfRange { .. }) {
                Err(decimal_error)
            } else {
                Err(dms_error)
            }
        }
    }
}

/// Parse `latitude, longitude` in decimal degrees
fn parse_decimal(raw: &str) -> Result<LngLat, CoordinateError> {
    let parts: Vec<&str> = raw.split(',').map(|part| part.trim()).collect();

    if parts.len() != 2 {
        return Err(CoordinateError::MalformedPair);
    }

    let lat = parse_finite(parts[0])?;
    let lon = parse_finite(parts[1])?;

    validate_range(lat, lon)?;
    Ok(LngLat { lon, lat })
}

/// Parse two whitespace-separated DMS tokens, latitude first
fn parse_dms(raw: &str) -> Result<LngLat, CoordinateError> {
    let cleaned = raw.replace('"', "");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    if tokens.len() != 2 {
        return Err(CoordinateError::MalformedPair);
    }

    let lat = dms_token_to_decimal(tokens[0])?;
    let lon = dms_token_to_decimal(tokens[1])?;

    validate_range(lat, lon)?;
    Ok(LngLat { lon, lat })
}

/// Convert one `<degrees>°<minutes>'<seconds><hemisphere>` token to decimal
/// degrees, negated for southern and western hemispheres
fn dms_token_to_decimal(token: &str) -> Result<f64, CoordinateError> {
    let captures = DMS_TOKEN
        .captures(token)
        .ok_or_else(|| CoordinateError::MalformedDmsToken {
            token: token.to_string(),
        })?;

    let degrees = parse_finite(&captures[1])?;
    let minutes = parse_finite(&captures[2])?;
    let seconds = parse_finite(&captures[3])?;

    let mut decimal = degrees + minutes / 60.0 + seconds / 3600.0;

    if matches!(captures[4].to_ascii_uppercase().as_str(), "S" | "W") {
        decimal = -decimal;
    }

    Ok(decimal)
}

fn parse_finite(value: &str) -> Result<f64, CoordinateError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| CoordinateError::NotANumber {
            value: value.to_string(),
        })
}

fn validate_range(lat: f64, lon: f64) -> Result<(), CoordinateError> {
    let lat_ok = (LATITUDE_RANGE.0..=LATITUDE_RANGE.1).contains(&lat);
    let lon_ok = (LONGITUDE_RANGE.0..=LONGITUDE_RANGE.1).contains(&lon);

    if lat_ok && lon_ok {
        Ok(())
    } else {
        Err(CoordinateError::OutOfRange { lat, lon })
    }
}
