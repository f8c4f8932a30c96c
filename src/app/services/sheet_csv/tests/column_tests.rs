//! Tests for header resolution

use super::sample_header;
use crate::app::services::sheet_csv::columns::{ColumnMap, optional_cell};
use crate::app::services::sheet_csv::tokenizer::tokenize;
use crate::config::ColumnLabels;
use crate::Error;

#[test]
fn test_resolve_published_sheet_header() {
    let header_fields = tokenize(sample_header());
    let map = ColumnMap::resolve(&header_fields, &ColumnLabels::default()).unwrap();

    assert_eq!(map.timestamp, Some(0));
    assert_eq!(map.name, 1);
    assert_eq!(map.description, Some(2));
    assert_eq!(map.coordinates, 3);
    assert_eq!(map.external_link, Some(4));
    assert_eq!(map.scale, Some(5));
    assert_eq!(map.category, Some(6));
}

#[test]
fn test_coordinates_matched_by_containment() {
    // The coordinates label has changed trailing text over time; only the
    // fragment needs to appear.
    let header_fields = tokenize("ლოკაციის სახელი,რაღაც კოორდინატები რაღაც");
    let map = ColumnMap::resolve(&header_fields, &ColumnLabels::default()).unwrap();

    assert_eq!(map.coordinates, 1);
}

#[test]
fn test_missing_name_column_is_structural() {
    let header_fields = tokenize("Timestamp,კოორდინატები");
    let result = ColumnMap::resolve(&header_fields, &ColumnLabels::default());

    assert!(matches!(result, Err(Error::CsvStructure { .. })));
}

#[test]
fn test_missing_coordinates_column_is_structural() {
    let header_fields = tokenize("Timestamp,ლოკაციის სახელი,ლოკაციის აღწერა");
    let result = ColumnMap::resolve(&header_fields, &ColumnLabels::default());

    assert!(matches!(result, Err(Error::CsvStructure { .. })));
}

#[test]
fn test_optional_columns_may_be_absent() {
    let header_fields = tokenize("ლოკაციის სახელი,კოორდინატები");
    let map = ColumnMap::resolve(&header_fields, &ColumnLabels::default()).unwrap();

    assert_eq!(map.timestamp, None);
    assert_eq!(map.description, None);
    assert_eq!(map.external_link, None);
    assert_eq!(map.scale, None);
    assert_eq!(map.category, None);
}

#[test]
fn test_custom_labels() {
    let labels = ColumnLabels::default()
        .with_name("Location name")
        .with_coordinates_fragment("Coordinates");

    let header_fields = tokenize("Location name,GPS Coordinates (paste here)");
    let map = ColumnMap::resolve(&header_fields, &labels).unwrap();

    assert_eq!(map.name, 0);
    assert_eq!(map.coordinates, 1);
}

#[test]
fn test_optional_cell_indexes_defensively() {
    let fields: Vec<String> = vec!["a".to_string(), "  ".to_string()];

    assert_eq!(optional_cell(&fields, Some(0)), Some("a"));
    assert_eq!(optional_cell(&fields, Some(1)), None); // blank cell
    assert_eq!(optional_cell(&fields, Some(7)), None); // short row
    assert_eq!(optional_cell(&fields, None), None); // unresolved column
}
