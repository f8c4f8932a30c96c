//! Command implementations for the POI ingester CLI
//!
//! Each command lives in its own module; this module only dispatches.

pub mod categories;
pub mod ingest;
pub mod locate;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the POI ingester
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `ingest`: fetch or read a CSV export and build marker records
/// - `categories`: print the known category table
/// - `locate`: resolve an approximate location from the public IP
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Ingest(ingest_args) => ingest::run_ingest(ingest_args).await,
        Commands::Categories(categories_args) => categories::run_categories(categories_args),
        Commands::Locate(locate_args) => locate::run_locate(locate_args).await,
    }
}
