//! Document-level ingestion orchestration
//!
//! Splits the raw CSV text into lines, resolves the header once, builds a
//! record per data row, sorts, and reports a summary. The pipeline is a pure
//! function of its input text: no internal state survives a run, and
//! independent callers can ingest concurrently.

use tracing::{debug, info};

use super::columns::ColumnMap;
use super::record::build_marker_record;
use super::stats::{IngestResult, IngestStats};
use super::tokenizer::tokenize;
use crate::app::models::{CoordinateNotation, MarkerRecord};
use crate::config::ColumnLabels;
use crate::{Error, Result};

/// Ingestor for published marker spreadsheet exports
#[derive(Debug, Clone, Default)]
pub struct SheetIngestor {
    labels: ColumnLabels,
}

impl SheetIngestor {
    /// Create an ingestor using the published sheet's default column labels
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an ingestor with custom column labels
    pub fn with_labels(labels: ColumnLabels) -> Self {
        Self { labels }
    }

    /// Ingest a CSV document into sorted marker records with statistics
    ///
    /// Fails with a structural error when the document has fewer than two
    /// lines or when a mandatory column cannot be resolved. Row-level
    /// defects only remove the affected row and are counted in the stats.
    pub fn ingest(&self, csv_text: &str) -> Result<IngestResult> {
        self.labels.validate()?;

        // split('\n') rather than lines(): a header row with a trailing
        // newline counts as a two-line document with zero data rows.
        let lines: Vec<&str> = csv_text.split('\n').collect();

        if lines.len() < 2 {
            return Err(Error::csv_structure(
                "CSV document must contain a header line and at least one further line",
            ));
        }

        let header_fields = tokenize(lines[0]);
        let columns = ColumnMap::resolve(&header_fields, &self.labels)?;

        let mut stats = IngestStats::new();
        let mut markers = Vec::new();

        for (line_index, line) in lines.iter().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }

            stats.total_rows += 1;
            let fields = tokenize(line);

            match build_marker_record(&fields, &columns) {
                Ok(built) => {
                    match built.notation {
                        CoordinateNotation::Decimal => stats.decimal_count += 1,
                        CoordinateNotation::Dms => stats.dms_count += 1,
                    }
                    markers.push(built.record);
                    stats.accepted += 1;
                }
                Err(defect) => {
                    stats.skipped += 1;
                    stats
                        .errors
                        .push(format!("Line {}: {}", line_index + 1, defect));
                    debug!("Skipped line {}: {}", line_index + 1, defect);
                }
            }
        }

        sort_newest_first(&mut markers);

        info!(
            "Ingested {} markers from {} rows ({} skipped, {} decimal, {} DMS)",
            stats.accepted, stats.total_rows, stats.skipped, stats.decimal_count, stats.dms_count
        );

        Ok(IngestResult { markers, stats })
    }
}

/// Sort markers by submission time, newest first; markers without a
/// timestamp sort after all timestamped ones. The sort is stable, so the
/// relative order of timestamp-less markers is preserved.
fn sort_newest_first(markers: &mut [MarkerRecord]) {
    markers.sort_by(|a, b| match (a.submitted_at, b.submitted_at) {
        (Some(a_ts), Some(b_ts)) => b_ts.cmp(&a_ts),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

/// Ingest a CSV document using the published sheet's default column labels
pub fn ingest(csv_text: &str) -> Result<IngestResult> {
    SheetIngestor::new().ingest(csv_text)
}
