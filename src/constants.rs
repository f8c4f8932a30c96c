//! Application constants for POI ingestion
//!
//! This module contains the published spreadsheet column labels, record
//! defaults, timestamp formats, and collaborator endpoints used throughout
//! the application.

// =============================================================================
// Published Spreadsheet Columns
// =============================================================================

/// Header label of the submission timestamp column (Google Forms default)
pub const COLUMN_TIMESTAMP: &str = "Timestamp";

/// Header label of the marker name column
pub const COLUMN_NAME: &str = "ლოკაციის სახელი";

/// Header label of the marker description column
pub const COLUMN_DESCRIPTION: &str = "ლოკაციის აღწერა";

/// Header fragment identifying the coordinates column (matched by containment)
pub const COLUMN_COORDINATES_FRAGMENT: &str = "კოორდინატები";

/// Header label of the external map link column
pub const COLUMN_EXTERNAL_LINK: &str = "Google Maps-ის ლინკი";

/// Header label of the marker scale column
pub const COLUMN_SCALE: &str = "მარკერის ზომა";

/// Header fragment identifying the category column (matched by containment)
pub const COLUMN_CATEGORY_FRAGMENT: &str = "ლოკაციის ტიპი";

// =============================================================================
// Record Defaults
// =============================================================================

/// Display name used when the name cell is blank
pub const UNNAMED_MARKER_PLACEHOLDER: &str = "უსახელო ლოკაცია";

/// External link used when the link cell is absent
pub const EXTERNAL_LINK_PLACEHOLDER: &str = "#";

/// Marker scale used when the scale cell is absent or unparsable
pub const DEFAULT_MARKER_SCALE: f64 = 1.0;

/// Delimiter splitting a category cell into tag and description
pub const CATEGORY_TAG_DELIMITER: &str = " - ";

// =============================================================================
// Timestamp Formats
// =============================================================================

/// Accepted date-time formats for the submission timestamp cell, tried in
/// order. Google Forms exports US-style `%m/%d/%Y %H:%M:%S`; the ISO forms
/// cover manually edited rows. RFC 3339 is tried separately before these.
pub const TIMESTAMP_DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Accepted date-only formats, tried after the date-time formats
pub const TIMESTAMP_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

// =============================================================================
// Coordinate Bounds
// =============================================================================

/// Valid latitude range in decimal degrees
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Valid longitude range in decimal degrees
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

// =============================================================================
// Collaborator Endpoints
// =============================================================================

/// Published CSV export of the community marker spreadsheet
pub const PUBLISHED_SHEET_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTtH19FvWQJmQ4bsS_iEMws13YvEgPE_6QaUM2k3LV0d0682bYGCTTWYexlHoZLsvQxS8620ROLYaFS/pub?gid=361615453&single=true&output=csv";

/// Free IP geolocation providers, tried in order
pub const IP_GEOLOCATION_PROVIDERS: &[&str] =
    &["https://ipapi.co/json/", "https://ipwho.is/"];

/// Per-provider timeout for IP geolocation requests, in milliseconds
pub const IP_GEOLOCATION_TIMEOUT_MS: u64 = 5_000;

/// Map center used when no viewer location can be resolved, as (lon, lat)
pub const DEFAULT_MAP_CENTER: (f64, f64) = (43.5, 42.3);
