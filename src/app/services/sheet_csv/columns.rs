//! Header resolution to column indices
//!
//! The first line of the export maps header labels to column positions.
//! Matching is exact for most columns but by substring containment for the
//! coordinates and category columns, whose labels on the published sheet
//! carry trailing form-question text that has changed over time.

use crate::config::ColumnLabels;
use crate::{Error, Result};
use tracing::debug;

/// Resolved column indices for one document
///
/// Name and coordinates are mandatory: a header row that does not resolve
/// both is a structural failure and the whole ingestion aborts. Every other
/// column is optional and its absence falls back to the record defaults.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub timestamp: Option<usize>,
    pub name: usize,
    pub description: Option<usize>,
    pub coordinates: usize,
    pub external_link: Option<usize>,
    pub scale: Option<usize>,
    pub category: Option<usize>,
}

impl ColumnMap {
    /// Resolve header fields against the configured labels
    pub fn resolve(header_fields: &[String], labels: &ColumnLabels) -> Result<Self> {
        let exact = |label: &str| {
            header_fields
                .iter()
                .position(|field| field.trim() == label)
        };
        let containing = |fragment: &str| {
            header_fields
                .iter()
                .position(|field| field.contains(fragment))
        };

        let name = exact(&labels.name);
        let coordinates = containing(&labels.coordinates_fragment);

        let (Some(name), Some(coordinates)) = (name, coordinates) else {
            let mut missing = Vec::new();
            if name.is_none() {
                missing.push(format!("name ('{}')", labels.name));
            }
            if coordinates.is_none() {
                missing.push(format!("coordinates ('*{}*')", labels.coordinates_fragment));
            }
            return Err(Error::csv_structure(format!(
                "Required columns are missing from the CSV header: {}",
                missing.join(", ")
            )));
        };

        let map = Self {
            timestamp: exact(&labels.timestamp),
            name,
            description: exact(&labels.description),
            coordinates,
            external_link: exact(&labels.external_link),
            scale: exact(&labels.scale),
            category: containing(&labels.category_fragment),
        };

        debug!(
            "Resolved header: name={}, coordinates={}, timestamp={:?}, category={:?}",
            map.name, map.coordinates, map.timestamp, map.category
        );

        Ok(map)
    }
}

/// Get a trimmed, non-empty cell from a tokenized row by optional index
///
/// Rows vary in field count, so out-of-bounds indices simply yield `None`.
pub fn optional_cell<'a>(fields: &'a [String], index: Option<usize>) -> Option<&'a str> {
    index
        .and_then(|index| fields.get(index))
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
}
