//! Daily report importer for per-date CSSE snapshot files.
//!
//! Iterates calendar dates from a configured start date to an upper bound
//! captured once at startup, opens the report file named after each date,
//! and emits three metrics (confirmed, deaths, recovered) per accepted row.
//!
//! ## Architecture
//!
//! - [`parser`] - Date iteration, per-file scanning, and row policy
//!
//! Failure isolation is per-file and per-row: a missing report file or a
//! malformed row is logged and skipped, never fatal.

pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{DailyReportImporter, date_range};
