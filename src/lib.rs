//! POI Ingest Library
//!
//! A Rust library for ingesting community-submitted points of interest from a
//! published spreadsheet CSV export into validated geographic marker records.
//!
//! This library provides tools for:
//! - Tokenizing loosely-structured, human-edited CSV rows with quoted fields
//! - Normalizing decimal and degrees/minutes/seconds coordinate notations
//!   into a single canonical (longitude, latitude) representation
//! - Building validated marker records with defaults for missing fields
//! - Skipping corrupt rows without aborting the run, with a diagnostic summary
//! - Fetching the published CSV export and resolving an approximate viewer
//!   location via IP lookup

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod state;
    pub mod services {
        pub mod categories;
        pub mod fetch;
        pub mod geolocate;
        pub mod sheet_csv;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{LngLat, MarkerRecord};
pub use app::services::sheet_csv::{IngestResult, IngestStats, SheetIngestor, ingest};
pub use config::ColumnLabels;

/// Result type alias for POI ingestion
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ingestion operations
///
/// Only structural, document-level problems surface here. Row-level defects
/// (bad coordinate syntax, out-of-range values, unparsable dates) never become
/// an `Error`: the affected row is skipped and counted in the diagnostic
/// summary instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV document (missing header row or mandatory column)
    #[error("CSV structure error: {message}")]
    CsvStructure { message: String },

    /// Fetching the published CSV export failed
    #[error("Fetch error for '{url}': {message}")]
    Fetch { url: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Writing the marker output file failed
    #[error("Output error: {message}")]
    Output {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV structure error
    pub fn csv_structure(message: impl Into<String>) -> Self {
        Self::CsvStructure {
            message: message.into(),
        }
    }

    /// Create a fetch error
    pub fn fetch(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Output {
            message: message.into(),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
