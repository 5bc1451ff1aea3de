//! Test utilities for daily report importer testing
//!
//! Provides helpers for building in-memory emitters, reading emitted
//! protocol lines back, and constructing on-disk report trees.

use chrono::{NaiveDate, NaiveDateTime};

use crate::app::services::carbon::CarbonEmitter;


/// Create an emitter backed by an in-memory buffer
pub fn test_emitter() -> CarbonEmitter<Vec<u8>> {
    CarbonEmitter::new(Vec::new())
}

/// Read the protocol lines an emitter has written
pub fn emitted_lines(emitter: CarbonEmitter<Vec<u8>>) -> Vec<String> {
    String::from_utf8(emitter.into_inner())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Shorthand for a calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Shorthand for a date and time
pub fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
}

/// A well-formed daily report covering the common row shapes
pub fn sample_report() -> &'static str {
    "Province/State,Country/Region,Last Update,Confirmed,Deaths,Recovered\n\
     ,Germany,2020-03-01T00:00:00,10,1,0\n\
     Hubei,Mainland China,3/1/2020 0:00,80,20,5\n"
}
