//! Locate command implementation

use colored::*;
use tracing::info;

use crate::app::services::geolocate::{fallback_center, locate_via_ip};
use crate::cli::args::LocateArgs;
use crate::Result;

/// Locate command runner
///
/// Tries the IP geolocation providers and falls back to the default map
/// center when none gives a usable fix.
pub async fn run_locate(args: LocateArgs) -> Result<()> {
    super::shared::setup_logging(args.get_log_level(), false)?;

    info!("Resolving approximate location via IP");

    match locate_via_ip().await {
        Some(coordinate) => {
            println!(
                "Approximate location: {} ({}, {})",
                "resolved".green(),
                coordinate.lat,
                coordinate.lon
            );
        }
        None => {
            let center = fallback_center();
            println!(
                "Approximate location: {} (using default center {}, {})",
                "unavailable".yellow(),
                center.lat,
                center.lon
            );
        }
    }

    Ok(())
}
