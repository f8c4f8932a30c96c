//! Data models for POI ingestion
//!
//! This module contains the canonical geographic coordinate type and the
//! validated marker record produced by the ingestion pipeline.

use crate::constants::{LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Canonical Coordinate
// =============================================================================

/// Canonical geographic coordinate in WGS84 decimal degrees
///
/// The field order is (longitude, latitude) throughout: the map layer, the
/// geolocation fallback, and the ingestion pipeline all agree on it. Both
/// values are finite and within standard geographic bounds once constructed
/// through [`LngLat::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    /// Longitude in decimal degrees, within [-180, 180]
    pub lon: f64,

    /// Latitude in decimal degrees, within [-90, 90]
    pub lat: f64,
}

impl LngLat {
    /// Create a coordinate with bounds validation
    pub fn new(lon: f64, lat: f64) -> Result<Self> {
        let coordinate = Self { lon, lat };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Validate finiteness and geographic bounds
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !(LATITUDE_RANGE.0..=LATITUDE_RANGE.1).contains(&self.lat) {
            return Err(Error::data_validation(format!(
                "Invalid latitude {}: must be between {} and {} degrees",
                self.lat, LATITUDE_RANGE.0, LATITUDE_RANGE.1
            )));
        }

        if !self.lon.is_finite() || !(LONGITUDE_RANGE.0..=LONGITUDE_RANGE.1).contains(&self.lon) {
            return Err(Error::data_validation(format!(
                "Invalid longitude {}: must be between {} and {} degrees",
                self.lon, LONGITUDE_RANGE.0, LONGITUDE_RANGE.1
            )));
        }

        Ok(())
    }

    /// Get the coordinate as a (longitude, latitude) tuple
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lon, self.lat)
    }
}

/// Coordinate notation accepted by the normalizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateNotation {
    /// Plain decimal degrees, e.g. `41.688752, 44.796152`
    Decimal,
    /// Degrees/minutes/seconds with hemisphere, e.g. `41°42'26.1"N 44°46'29.7"E`
    Dms,
}

// =============================================================================
// Marker Record
// =============================================================================

/// A validated point-of-interest record
///
/// Records are only constructed through [`MarkerRecord::new`], so every
/// record leaving the pipeline carries a valid coordinate and a positive
/// scale. Records are rebuilt from scratch on every ingestion run; no
/// identity persists across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerRecord {
    /// Display name; never empty (a placeholder fills blank source cells)
    pub name: String,

    /// Free-form description; empty allowed
    pub description: String,

    /// Canonical marker position
    pub coordinates: LngLat,

    /// External map-provider link; "#" when the source cell is absent
    pub external_link: String,

    /// Display size multiplier, always positive
    pub scale: f64,

    /// Category tag, preserved verbatim even when not in the known set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_tag: Option<String>,

    /// Submission timestamp; absent when missing or unparsable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl MarkerRecord {
    /// Create a new marker record with validation
    pub fn new(
        name: String,
        description: String,
        coordinates: LngLat,
        external_link: String,
        scale: f64,
        category_tag: Option<String>,
        submitted_at: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        let record = Self {
            name,
            description,
            coordinates,
            external_link,
            scale,
            category_tag,
            submitted_at,
        };

        record.validate()?;
        Ok(record)
    }

    /// Validate record invariants
    pub fn validate(&self) -> Result<()> {
        self.coordinates.validate()?;

        if self.name.trim().is_empty() {
            return Err(Error::data_validation(
                "Marker name cannot be empty".to_string(),
            ));
        }

        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::data_validation(format!(
                "Invalid marker scale {}: must be a positive number",
                self.scale
            )));
        }

        Ok(())
    }

    /// Look up the category descriptor for this marker's tag, if it is one
    /// of the known categories
    pub fn category(&self) -> Option<&'static crate::app::services::categories::CategoryDescriptor> {
        self.category_tag
            .as_deref()
            .and_then(crate::app::services::categories::category_for_symbol)
    }
}
