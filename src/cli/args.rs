//! Command-line argument definitions for the POI ingester
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the POI ingester
///
/// Ingests community-submitted points of interest from a published
/// spreadsheet CSV export into validated, sorted marker records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "poi-ingest",
    version,
    about = "Ingest community map markers from a published spreadsheet CSV export",
    long_about = "Ingests community-submitted points of interest from a published Google Sheets \
                  CSV export. Tolerates the loosely-structured rows real submitters produce: \
                  quoted fields, decimal or degrees/minutes/seconds coordinates, missing cells. \
                  Corrupt rows are skipped and counted rather than aborting the run."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the POI ingester
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Ingest a CSV export into marker records (default command)
    Ingest(IngestArgs),
    /// List the known marker categories
    Categories(CategoriesArgs),
    /// Resolve an approximate location from the current public IP
    Locate(LocateArgs),
}

/// Arguments for the ingest command
#[derive(Debug, Clone, Parser)]
pub struct IngestArgs {
    /// Input path to a CSV file
    ///
    /// When neither this nor --url is given, the published community sheet
    /// is fetched.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Read the CSV export from a local file"
    )]
    pub input: Option<PathBuf>,

    /// URL of a published CSV export to fetch
    #[arg(
        short = 'u',
        long = "url",
        value_name = "URL",
        conflicts_with = "input",
        help = "Fetch the CSV export from a URL"
    )]
    pub url: Option<String>,

    /// Output file for the ingested markers as JSON
    ///
    /// If not specified, markers are only summarized, not written.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write ingested markers to a JSON file"
    )]
    pub output: Option<PathBuf>,

    /// Output format for the ingestion report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the ingestion report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the categories command
#[derive(Debug, Clone, Parser)]
pub struct CategoriesArgs {
    /// Output format for the category table
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the category table"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the locate command
#[derive(Debug, Clone, Parser)]
pub struct LocateArgs {
    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl IngestArgs {
    /// Validate the ingest command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            if !input.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    input.display()
                )));
            }

            if !input.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    input.display()
                )));
            }
        }

        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl LocateArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for IngestArgs {
    fn default() -> Self {
        Self {
            input: None,
            url: None,
            output: None,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        }
    }
}
