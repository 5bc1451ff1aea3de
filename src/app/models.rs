//! Core data models for CSSE import operations
//!
//! This module defines the measure taxonomy shared by both import variants
//! and the emitted data point triple. Nothing here persists beyond a single
//! row's processing; records are transformed into data points immediately.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Case count measure reported by the CSSE exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measure {
    Confirmed,
    Deaths,
    Recovered,
}

impl Measure {
    /// Measures present in a daily report row, in field order
    pub const DAILY: [Measure; 3] = [Measure::Confirmed, Measure::Deaths, Measure::Recovered];

    /// Measures with a global time-series file (there is no recovered file)
    pub const TIME_SERIES: [Measure; 2] = [Measure::Confirmed, Measure::Deaths];

    /// Metric path segment for this measure
    pub fn as_str(&self) -> &'static str {
        match self {
            Measure::Confirmed => "confirmed",
            Measure::Deaths => "deaths",
            Measure::Recovered => "recovered",
        }
    }

    /// Field index of this measure's count in a daily report row
    pub fn daily_field_index(&self) -> usize {
        match self {
            Measure::Confirmed => 3,
            Measure::Deaths => 4,
            Measure::Recovered => 5,
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single metric observation bound for the carbon backend.
///
/// The value is the raw CSV cell, passed through verbatim; the backend is
/// responsible for numeric interpretation and aggregation. The timestamp is
/// Unix epoch seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Dotted metric path, e.g. `covid-19.germany.none.confirmed`
    pub metric: String,

    /// Raw count value as it appeared in the CSV cell
    pub value: String,

    /// Observation time in Unix epoch seconds
    pub timestamp: i64,
}

impl DataPoint {
    /// Create a data point from its parts
    pub fn new(metric: impl Into<String>, value: impl Into<String>, timestamp: i64) -> Self {
        Self {
            metric: metric.into(),
            value: value.into(),
            timestamp,
        }
    }
}

impl fmt::Display for DataPoint {
    /// Format as a plaintext protocol line, without the trailing newline
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.metric, self.value, self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_segments() {
        assert_eq!(Measure::Confirmed.as_str(), "confirmed");
        assert_eq!(Measure::Deaths.as_str(), "deaths");
        assert_eq!(Measure::Recovered.as_str(), "recovered");
    }

    #[test]
    fn test_daily_field_indices_follow_row_layout() {
        // Daily rows are [region, country, last_update, confirmed, deaths, recovered]
        let indices: Vec<usize> = Measure::DAILY.iter().map(|m| m.daily_field_index()).collect();
        assert_eq!(indices, vec![3, 4, 5]);
    }

    #[test]
    fn test_time_series_has_no_recovered_file() {
        assert!(!Measure::TIME_SERIES.contains(&Measure::Recovered));
    }

    #[test]
    fn test_data_point_line_format() {
        let point = DataPoint::new("covid-19.germany.none.confirmed", "10", 1583020800);
        assert_eq!(
            point.to_string(),
            "covid-19.germany.none.confirmed 10 1583020800"
        );
    }
}
