//! Fetching the published spreadsheet CSV export
//!
//! The spreadsheet is published as a plain CSV document behind a stable URL.
//! Fetching is deliberately dumb: one GET, no caching, no retries. Every run
//! re-reads the whole document and the pipeline rebuilds all markers from it.

use std::time::Duration;

use tracing::{debug, info};

use crate::{Error, Result};

/// Request timeout for the CSV export download
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Download the published CSV export from the given URL
///
/// Returns the raw CSV text on success. A non-success HTTP status or a
/// transport failure is a structural problem and aborts the run.
pub async fn fetch_sheet_csv(url: &str) -> Result<String> {
    debug!("Fetching CSV export from {}", url);

    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| Error::fetch(url, format!("Failed to build HTTP client: {e}")))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::fetch(url, format!("Request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::fetch(
            url,
            format!("Server responded with status {status}"),
        ));
    }

    let body = response
        .text()
        .await
        .map_err(|e| Error::fetch(url, format!("Failed to read response body: {e}")))?;

    info!("Fetched {} bytes of CSV", body.len());
    Ok(body)
}
