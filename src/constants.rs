//! Application constants for the CSSE importer
//!
//! This module contains the metric namespace, date format strings,
//! header-detection literals, field offsets, and default flag values
//! used throughout the importer.

// =============================================================================
// Metric Naming
// =============================================================================

/// Leading segment of every emitted metric path
pub const METRIC_NAMESPACE: &str = "covid-19";

/// Path segment substituted for an empty region or country label
pub const EMPTY_SEGMENT_DEFAULT: &str = "none";

// =============================================================================
// Date Formats
// =============================================================================

/// Format of the `--since` flag value (e.g. `2020-01-01`)
pub const SINCE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of daily report filenames, without the `.csv` suffix
/// (e.g. `03-01-2020`)
pub const REPORT_FILE_DATE_FORMAT: &str = "%m-%d-%Y";

/// Ordered fallback chain for the daily report "last update" field.
///
/// The CSSE exports switched timestamp conventions several times; formats
/// are tried in this order and the first success wins.
pub const DAILY_TIMESTAMP_FORMATS: &[&str] = &[
    // ISO-like timestamp, e.g. `2020-03-01T00:00:00`
    "%Y-%m-%dT%H:%M:%S",
    // Slash-separated with 4-digit year, e.g. `3/1/2020 0:00`
    "%m/%d/%Y %H:%M",
    // Slash-separated with 2-digit year, e.g. `3/1/20 0:00`
    "%m/%d/%y %H:%M",
];

/// Format of time-series header date columns (e.g. `1/22/20`)
pub const TIME_SERIES_DATE_FORMAT: &str = "%m/%d/%y";

// =============================================================================
// CSV Row Layout
// =============================================================================

/// Prefix identifying a region header cell (`Province/State` in practice)
pub const REGION_HEADER_PREFIX: &str = "Province";

/// Literal third-column value identifying a daily report header row
pub const LAST_UPDATE_HEADER: &str = "Last Update";

/// Minimum number of fields in a usable daily report row
pub const DAILY_MIN_FIELDS: usize = 6;

/// First date-bearing column in a time-series row
/// (after region, country, latitude, longitude)
pub const TIME_SERIES_FIRST_DATE_COLUMN: usize = 4;

// =============================================================================
// Input File Layout
// =============================================================================

/// Top-level data directory within a CSSE repository checkout
pub const CSSE_DATA_DIR_NAME: &str = "csse_covid_19_data";

/// Daily reports directory within the CSSE data directory
pub const DAILY_REPORTS_DIR_NAME: &str = "csse_covid_19_daily_reports";

/// Time-series directory within the CSSE data directory
pub const TIME_SERIES_DIR_NAME: &str = "csse_covid_19_time_series";

/// Build the filename of a global time-series file for a measure segment
pub fn time_series_filename(measure: &str) -> String {
    format!("time_series_covid19_{measure}_global.csv")
}

// =============================================================================
// Flag Defaults
// =============================================================================

/// Default CSSE repository checkout location
pub const DEFAULT_DATA_DIR: &str = "/home/stefan/git/COVID-19/";

/// Default carbon-cache address for the plaintext line protocol
pub const DEFAULT_CARBON_ADDRESS: &str = "localhost:2003";

/// Default start date for the daily report scan
pub const DEFAULT_SINCE_DATE: &str = "2020-01-01";
