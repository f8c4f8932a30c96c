//! Approximate viewer location via IP lookup
//!
//! Free IP geolocation providers are tried in order; the first response
//! carrying a plausible coordinate wins. Failure is normal here (ad blockers,
//! rate limits, providers disappearing), so the result is an `Option` and the
//! caller falls back to the default map center.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::app::models::LngLat;
use crate::constants::{DEFAULT_MAP_CENTER, IP_GEOLOCATION_PROVIDERS, IP_GEOLOCATION_TIMEOUT_MS};

/// Coordinate fields shared by the supported providers
///
/// ipapi.co and ipwho.is both use `latitude`/`longitude`; the aliases cover
/// providers that abbreviate.
#[derive(Debug, Deserialize)]
struct ProviderResponse {
    #[serde(alias = "lat")]
    latitude: Option<f64>,

    #[serde(alias = "lon", alias = "lng")]
    longitude: Option<f64>,
}

/// Resolve an approximate viewer location from the client's public IP
///
/// Returns `None` when every provider fails or returns an implausible
/// coordinate. Never errors.
pub async fn locate_via_ip() -> Option<LngLat> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(IP_GEOLOCATION_TIMEOUT_MS))
        .build()
        .ok()?;

    for provider in IP_GEOLOCATION_PROVIDERS {
        match query_provider(&client, provider).await {
            Some(coordinate) => {
                debug!(
                    "Resolved viewer location ({}, {}) via {}",
                    coordinate.lat, coordinate.lon, provider
                );
                return Some(coordinate);
            }
            None => debug!("IP geolocation provider {} gave no usable fix", provider),
        }
    }

    None
}

/// Map center to use when no viewer location can be resolved
pub fn fallback_center() -> LngLat {
    let (lon, lat) = DEFAULT_MAP_CENTER;
    LngLat { lon, lat }
}

async fn query_provider(client: &reqwest::Client, url: &str) -> Option<LngLat> {
    let response = client.get(url).send().await.ok()?;
    if !response.status().is_success() {
        return None;
    }

    let body: ProviderResponse = response.json().await.ok()?;
    let (lat, lon) = (body.latitude?, body.longitude?);

    // (0, 0) is the classic "no fix" sentinel from these providers
    if lat == 0.0 && lon == 0.0 {
        return None;
    }

    LngLat::new(lon, lat).ok()
}
