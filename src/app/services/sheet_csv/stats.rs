//! Ingestion statistics and result structures
//!
//! The statistics are a diagnostic summary for observability; the core
//! contract of the pipeline is the ordered marker collection.

use crate::app::models::MarkerRecord;

/// Ingestion result with markers and statistics
#[derive(Debug, Clone)]
pub struct IngestResult {
    /// Validated markers, sorted by submission time descending
    pub markers: Vec<MarkerRecord>,

    /// Diagnostic ingestion statistics
    pub stats: IngestStats,
}

/// Diagnostic summary of one ingestion run
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IngestStats {
    /// Number of non-blank data rows encountered
    pub total_rows: usize,

    /// Number of rows that produced a marker record
    pub accepted: usize,

    /// Number of rows discarded for row-level defects
    pub skipped: usize,

    /// Accepted markers whose coordinates were in decimal notation
    pub decimal_count: usize,

    /// Accepted markers whose coordinates were in DMS notation
    pub dms_count: usize,

    /// Per-row defect messages for debugging
    pub errors: Vec<String>,
}

impl IngestStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            accepted: 0,
            skipped: 0,
            decimal_count: 0,
            dms_count: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate acceptance rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.accepted as f64 / self.total_rows as f64) * 100.0
        }
    }
}

impl Default for IngestStats {
    fn default() -> Self {
        Self::new()
    }
}
