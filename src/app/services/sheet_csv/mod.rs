//! Ingestion pipeline for the published marker spreadsheet
//!
//! This module turns the raw CSV text of a published spreadsheet export into
//! an ordered collection of validated marker records. The export is edited by
//! humans through a form, so the parser is built to degrade per row: a corrupt
//! coordinate or date removes that one row, never the run.
//!
//! ## Architecture
//!
//! The pipeline is organized into logical components:
//! - [`tokenizer`] - Quoted-field CSV line tokenization
//! - [`coordinates`] - Decimal and DMS coordinate normalization
//! - [`columns`] - Header resolution to column indices
//! - [`record`] - Per-row marker record assembly
//! - [`pipeline`] - Document-level orchestration and sorting
//! - [`stats`] - Ingestion statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! let csv = "Timestamp,ლოკაციის სახელი,კოორდინატები\n\
//!            3/1/2024 10:15:00,ნარიყალა,\"41.688752, 44.796152\"";
//! let result = poi_ingest::ingest(csv)?;
//!
//! assert_eq!(result.markers.len(), 1);
//! assert_eq!(result.stats.accepted, 1);
//! # Ok::<(), poi_ingest::Error>(())
//! ```

pub mod columns;
pub mod coordinates;
pub mod pipeline;
pub mod record;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use columns::ColumnMap;
pub use coordinates::{CoordinateError, ParsedCoordinate, parse_coordinates};
pub use pipeline::{SheetIngestor, ingest};
pub use record::RowDefect;
pub use stats::{IngestResult, IngestStats};
pub use tokenizer::tokenize;
