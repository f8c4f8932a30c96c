//! Tests for the sheet CSV ingestion pipeline

pub mod column_tests;
pub mod record_tests;
pub mod stats_tests;

/// Header row matching the published sheet's current column labels
pub fn sample_header() -> &'static str {
    "Timestamp,ლოკაციის სახელი,ლოკაციის აღწერა,ლოკაციის კოორდინატები (ჩასვით აქ),Google Maps-ის ლინკი,მარკერის ზომა,ლოკაციის ტიპი (აირჩიეთ ერთი)"
}

/// A small but realistic export: decimal and DMS rows, a quoted description
/// containing a comma, a row without a timestamp, and two defective rows.
pub fn sample_csv() -> String {
    format!(
        "{}\n{}\n{}\n{}\n{}\n{}\n",
        sample_header(),
        // Decimal coordinates, full row
        "3/1/2024 10:15:00,ნარიყალა,\"ციხე, ძველი თბილისი\",\"41.688752, 44.796152\",https://maps.app.goo.gl/nariqala,2,🗿 - მონუმენტი/ძეგლი",
        // DMS coordinates with doubled quotes inside a quoted cell
        "1/1/2024 09:00:00,მტირალა,ეროვნული პარკი,\"41°42'26.1\"\"N 41°51'54.0\"\"E\",,,🌲 - პარკი",
        // No timestamp, minimal optional cells
        ",კაფე ლეილა,,\"41.693110, 44.807480\",,,☕ - კაფე",
        // Defective: unparsable coordinate cell
        "2/1/2024 12:00:00,სადღაც,აღწერა,somewhere nice,,,",
        // Defective: empty coordinate cell
        "2/2/2024 12:00:00,უკოორდინატო,აღწერა,,,,"
    )
}
