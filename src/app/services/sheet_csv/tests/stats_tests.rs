//! Tests for ingestion statistics

use crate::app::services::sheet_csv::stats::IngestStats;

#[test]
fn test_new_stats_are_zeroed() {
    let stats = IngestStats::new();

    assert_eq!(stats.total_rows, 0);
    assert_eq!(stats.accepted, 0);
    assert_eq!(stats.skipped, 0);
    assert_eq!(stats.decimal_count, 0);
    assert_eq!(stats.dms_count, 0);
    assert!(stats.errors.is_empty());
}

#[test]
fn test_success_rate() {
    let mut stats = IngestStats::new();
    stats.total_rows = 4;
    stats.accepted = 3;
    stats.skipped = 1;

    assert_eq!(stats.success_rate(), 75.0);
}

#[test]
fn test_success_rate_with_no_rows() {
    let stats = IngestStats::default();
    assert_eq!(stats.success_rate(), 0.0);
}

#[test]
fn test_stats_serialize_to_json() {
    let mut stats = IngestStats::new();
    stats.total_rows = 2;
    stats.accepted = 1;
    stats.skipped = 1;
    stats.errors.push("Line 3: coordinate cell is empty".to_string());

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["total_rows"], 2);
    assert_eq!(json["errors"][0], "Line 3: coordinate cell is empty");
}
