//! Timestamp resolution with ordered format fallback.
//!
//! The CSSE exports carry timestamps in several conventions, sometimes
//! within one file. The fallback policy is data-driven: an ordered slice of
//! chrono format specifiers is tried in sequence and the first success
//! wins. Callers receive an explicit `None` for an unresolvable value and
//! decide how to degrade.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::constants::{DAILY_TIMESTAMP_FORMATS, TIME_SERIES_DATE_FORMAT};

/// Unix timestamp substituted when a report timestamp cannot be resolved.
///
/// Rows with unreadable timestamps are still emitted, labeled with the
/// epoch start. Callers count these substitutions for the end-of-run
/// report.
pub const FALLBACK_TIMESTAMP: i64 = 0;

/// Try an ordered list of formats against a timestamp string.
///
/// Returns the first successful parse, or `None` when no format matches.
pub fn parse_with_fallback(value: &str, formats: &[&str]) -> Option<NaiveDateTime> {
    formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Resolve a daily report "last update" field through the fallback chain
pub fn parse_daily_timestamp(value: &str) -> Option<NaiveDateTime> {
    parse_with_fallback(value, DAILY_TIMESTAMP_FORMATS)
}

/// Resolve a time-series header cell (`M/D/YY`) to midnight UTC
pub fn parse_time_series_date(value: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(value.trim(), TIME_SERIES_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Convert a naive timestamp (interpreted as UTC) to epoch seconds
pub fn epoch_seconds(datetime: NaiveDateTime) -> i64 {
    DateTime::<Utc>::from_naive_utc_and_offset(datetime, Utc).timestamp()
}
