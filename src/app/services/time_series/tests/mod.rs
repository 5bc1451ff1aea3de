//! Test utilities for time-series importer testing

use crate::app::services::carbon::CarbonEmitter;


/// Header row matching the global time-series files, two date columns
pub const SAMPLE_HEADER: &str = "Province/State,Country/Region,Lat,Long,1/22/20,1/23/20";

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

/// Join a header and data rows into CSV content
pub fn csv_content(header: &str, rows: &[&str]) -> String {
    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    content
}
