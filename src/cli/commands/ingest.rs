//! Ingest command implementation
//!
//! Reads the CSV export from a file or URL, runs the ingestion pipeline, and
//! reports the result in human or JSON form. Optionally dumps the marker
//! records to a JSON file.

use std::fs;
use std::path::Path;
use std::time::Instant;

use colored::*;
use tracing::{debug, info};

use crate::app::models::MarkerRecord;
use crate::app::services::fetch::fetch_sheet_csv;
use crate::app::services::sheet_csv::{IngestResult, ingest};
use crate::cli::args::{IngestArgs, OutputFormat};
use crate::constants::PUBLISHED_SHEET_CSV_URL;
use crate::{Error, Result};

/// Ingest command runner
pub async fn run_ingest(args: IngestArgs) -> Result<()> {
    super::shared::setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting marker ingestion");
    debug!("Ingest arguments: {:?}", args);

    args.validate()?;

    let start_time = Instant::now();
    let csv_text = load_csv(&args).await?;
    let result = ingest(&csv_text)?;
    let elapsed = start_time.elapsed();

    if let Some(output) = &args.output {
        write_markers(output, &result.markers)?;
        info!("Wrote {} markers to {}", result.markers.len(), output.display());
    }

    match args.output_format {
        OutputFormat::Human => {
            if !args.quiet {
                print_human_report(&result, elapsed.as_secs_f64());
            }
        }
        OutputFormat::Json => print_json_report(&args, &result)?,
    }

    Ok(())
}

/// Load the CSV text from the configured source
///
/// Precedence: explicit input file, then explicit URL, then the published
/// community sheet.
async fn load_csv(args: &IngestArgs) -> Result<String> {
    if let Some(input) = &args.input {
        debug!("Reading CSV from file: {}", input.display());
        return fs::read_to_string(input)
            .map_err(|e| Error::io(format!("Failed to read {}", input.display()), e));
    }

    let url = args.url.as_deref().unwrap_or(PUBLISHED_SHEET_CSV_URL);
    fetch_sheet_csv(url).await
}

/// Write the marker records to a JSON file
fn write_markers(path: &Path, markers: &[MarkerRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(markers)
        .map_err(|e| Error::output("Failed to serialize markers", Box::new(e)))?;

    fs::write(path, json)
        .map_err(|e| Error::output(format!("Failed to write {}", path.display()), Box::new(e)))
}

/// Print a human-readable ingestion report
fn print_human_report(result: &IngestResult, elapsed_secs: f64) {
    let stats = &result.stats;

    println!();
    println!("{}", "Marker Ingestion Report".bold());
    println!("{}", "=======================".bold());
    println!();
    println!("  Rows processed:   {}", stats.total_rows);
    println!(
        "  Markers accepted: {} ({:.1}% of rows)",
        stats.accepted.to_string().green(),
        stats.success_rate()
    );
    println!(
        "  Rows skipped:     {}",
        if stats.skipped > 0 {
            stats.skipped.to_string().yellow()
        } else {
            stats.skipped.to_string().normal()
        }
    );
    println!(
        "  Coordinates:      {} decimal, {} DMS",
        stats.decimal_count, stats.dms_count
    );
    println!("  Elapsed:          {:.2}s", elapsed_secs);

    if !stats.errors.is_empty() {
        println!();
        println!("{}", "Skipped rows:".yellow().bold());
        for error in &stats.errors {
            println!("  {}", error.yellow());
        }
    }

    if let Some(newest) = result.markers.first() {
        println!();
        println!(
            "  Newest marker:    {} ({}, {})",
            newest.name.cyan(),
            newest.coordinates.lat,
            newest.coordinates.lon
        );
    }
    println!();
}

/// Print a machine-readable ingestion report
fn print_json_report(args: &IngestArgs, result: &IngestResult) -> Result<()> {
    let report = serde_json::json!({
        "stats": result.stats,
        "marker_count": result.markers.len(),
        "output_file": args.output.as_ref().map(|p| p.display().to_string()),
    });

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| Error::output("Failed to serialize report", Box::new(e)))?;
    println!("{}", json);
    Ok(())
}
