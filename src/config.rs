//! Configuration for header resolution.
//!
//! The published spreadsheet's column labels are baked into [`ColumnLabels::default`],
//! but every label can be overridden so a renamed sheet (or a sheet in another
//! language) can still be ingested without touching the pipeline.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Column labels used to resolve header cells to record fields
///
/// Name and coordinates are mandatory columns; the rest are optional and the
/// record builder falls back to defaults when they are missing. The
/// `*_fragment` labels are matched by substring containment, everything else
/// by exact (trimmed) equality, preserving the published sheet's behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnLabels {
    /// Submission timestamp column (exact match)
    pub timestamp: String,

    /// Marker name column (exact match, mandatory)
    pub name: String,

    /// Marker description column (exact match)
    pub description: String,

    /// Coordinates column (substring match, mandatory)
    pub coordinates_fragment: String,

    /// External map link column (exact match)
    pub external_link: String,

    /// Marker scale column (exact match)
    pub scale: String,

    /// Category column (substring match)
    pub category_fragment: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            timestamp: crate::constants::COLUMN_TIMESTAMP.to_string(),
            name: crate::constants::COLUMN_NAME.to_string(),
            description: crate::constants::COLUMN_DESCRIPTION.to_string(),
            coordinates_fragment: crate::constants::COLUMN_COORDINATES_FRAGMENT.to_string(),
            external_link: crate::constants::COLUMN_EXTERNAL_LINK.to_string(),
            scale: crate::constants::COLUMN_SCALE.to_string(),
            category_fragment: crate::constants::COLUMN_CATEGORY_FRAGMENT.to_string(),
        }
    }
}

impl ColumnLabels {
    /// Override the marker name label
    pub fn with_name(mut self, label: impl Into<String>) -> Self {
        self.name = label.into();
        self
    }

    /// Override the coordinates label fragment
    pub fn with_coordinates_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.coordinates_fragment = fragment.into();
        self
    }

    /// Override the timestamp label
    pub fn with_timestamp(mut self, label: impl Into<String>) -> Self {
        self.timestamp = label.into();
        self
    }

    /// Validate that the mandatory labels are usable
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::configuration(
                "Name column label cannot be empty".to_string(),
            ));
        }

        if self.coordinates_fragment.trim().is_empty() {
            return Err(Error::configuration(
                "Coordinates column fragment cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
