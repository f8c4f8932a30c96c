//! Tests for per-row marker record assembly

use chrono::{Datelike, Timelike};

use crate::app::services::sheet_csv::columns::ColumnMap;
use crate::app::services::sheet_csv::record::{
    RowDefect, build_marker_record, parse_category_cell, parse_scale_cell, parse_timestamp_cell,
};
use crate::constants::{EXTERNAL_LINK_PLACEHOLDER, UNNAMED_MARKER_PLACEHOLDER};

fn full_column_map() -> ColumnMap {
    ColumnMap {
        timestamp: Some(0),
        name: 1,
        description: Some(2),
        coordinates: 3,
        external_link: Some(4),
        scale: Some(5),
        category: Some(6),
    }
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|cell| cell.to_string()).collect()
}

#[test]
fn test_full_row_builds_record() {
    let fields = row(&[
        "3/1/2024 10:15:00",
        "ნარიყალა",
        "ციხე",
        "41.688752, 44.796152",
        "https://maps.app.goo.gl/x",
        "2",
        "🗿 - მონუმენტი/ძეგლი",
    ]);

    let built = build_marker_record(&fields, &full_column_map()).unwrap();
    let record = built.record;

    assert_eq!(record.name, "ნარიყალა");
    assert_eq!(record.description, "ციხე");
    assert_eq!(record.coordinates.as_tuple(), (44.796152, 41.688752));
    assert_eq!(record.external_link, "https://maps.app.goo.gl/x");
    assert_eq!(record.scale, 2.0);
    assert_eq!(record.category_tag.as_deref(), Some("🗿"));
    assert!(record.submitted_at.is_some());
}

#[test]
fn test_blank_optional_cells_get_defaults() {
    let fields = row(&["", "", "", "41.7, 44.8", "", "", ""]);

    let built = build_marker_record(&fields, &full_column_map()).unwrap();
    let record = built.record;

    assert_eq!(record.name, UNNAMED_MARKER_PLACEHOLDER);
    assert_eq!(record.description, "");
    assert_eq!(record.external_link, EXTERNAL_LINK_PLACEHOLDER);
    assert_eq!(record.scale, 1.0);
    assert_eq!(record.category_tag, None);
    assert_eq!(record.submitted_at, None);
}

#[test]
fn test_short_row_indexes_defensively() {
    // Coordinate column exists; everything after it is missing entirely
    let fields = row(&["", "name", "", "41.7, 44.8"]);

    let built = build_marker_record(&fields, &full_column_map()).unwrap();
    assert_eq!(built.record.scale, 1.0);
    assert_eq!(built.record.external_link, EXTERNAL_LINK_PLACEHOLDER);
}

#[test]
fn test_empty_coordinate_cell_is_a_defect() {
    let fields = row(&["", "name", "", "", "", "", ""]);

    let result = build_marker_record(&fields, &full_column_map());
    assert!(matches!(result, Err(RowDefect::MissingCoordinate)));
}

#[test]
fn test_malformed_coordinate_cell_is_a_defect() {
    let fields = row(&["", "name", "", "somewhere nice", "", "", ""]);

    let result = build_marker_record(&fields, &full_column_map());
    assert!(matches!(result, Err(RowDefect::Coordinate(_))));
}

#[test]
fn test_scale_cell_parsing() {
    assert_eq!(parse_scale_cell(Some("2.5")), 2.5);
    assert_eq!(parse_scale_cell(Some("დიდი")), 1.0);
    assert_eq!(parse_scale_cell(Some("0")), 1.0);
    assert_eq!(parse_scale_cell(Some("-3")), 1.0);
    assert_eq!(parse_scale_cell(None), 1.0);
}

#[test]
fn test_category_cell_splits_on_first_delimiter() {
    assert_eq!(parse_category_cell("☕ - cafe description"), "☕");
    assert_eq!(parse_category_cell("🌲 - პარკი - დაცული"), "🌲");
    assert_eq!(parse_category_cell("☕"), "☕");
}

#[test]
fn test_timestamp_allowlist() {
    // Google Forms export format
    let parsed = parse_timestamp_cell("3/1/2024 10:15:00").unwrap();
    assert_eq!((parsed.month(), parsed.day(), parsed.year()), (3, 1, 2024));
    assert_eq!(parsed.hour(), 10);

    // ISO date-time and date-only
    assert!(parse_timestamp_cell("2024-03-01 10:15:00").is_some());
    assert!(parse_timestamp_cell("2024-03-01").is_some());
    assert!(parse_timestamp_cell("2024-03-01T10:15:00+04:00").is_some());
    assert!(parse_timestamp_cell("3/1/2024 10:15").is_some());
}

#[test]
fn test_unparsable_timestamp_leaves_record_intact() {
    assert!(parse_timestamp_cell("გუშინ").is_none());
    assert!(parse_timestamp_cell("01.03.2024").is_none());

    let fields = row(&["გუშინ", "name", "", "41.7, 44.8", "", "", ""]);
    let built = build_marker_record(&fields, &full_column_map()).unwrap();
    assert_eq!(built.record.submitted_at, None);
}
