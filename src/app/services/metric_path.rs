//! Metric path construction for the carbon line protocol.
//!
//! Free-text region and country labels from the CSSE exports are normalized
//! into dot-delimited path segments. Normalization is deliberately
//! permissive: only whitespace trimming, space and period substitution, and
//! lowercasing. Other punctuation (commas, apostrophes, parentheses) passes
//! through unchanged, matching what downstream dashboards already key on.

use crate::app::models::Measure;
use crate::constants::{EMPTY_SEGMENT_DEFAULT, METRIC_NAMESPACE};

/// Normalize a free-text label into one metric path segment.
///
/// Trims leading and trailing whitespace, replaces interior spaces and
/// periods with underscores, and lowercases the result. Idempotent.
pub fn sanitize(label: &str) -> String {
    label
        .trim()
        .replace(' ', "_")
        .replace('.', "_")
        .to_lowercase()
}

/// Normalize a label, substituting `none` when nothing remains.
///
/// The sanitizer itself never injects defaults; the substitution of empty
/// region or country labels is the emitting side's responsibility and is
/// centralized here.
pub fn segment_or_none(label: &str) -> String {
    let segment = sanitize(label);
    if segment.is_empty() {
        EMPTY_SEGMENT_DEFAULT.to_string()
    } else {
        segment
    }
}

/// Build the full metric path for one measure of one region.
///
/// Both import variants emit `covid-19.<country>.<region>.<measure>`, with
/// the region defaulting to `none` when the export left it blank.
pub fn metric_path(country: &str, region: &str, measure: Measure) -> String {
    format!(
        "{}.{}.{}.{}",
        METRIC_NAMESPACE,
        segment_or_none(country),
        segment_or_none(region),
        measure.as_str()
    )
}
