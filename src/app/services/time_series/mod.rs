//! Time-series importer for the wide-format global CSSE files.
//!
//! Two fixed input files (confirmed, deaths) carry one row per region and
//! one column per date after a fixed offset. The header row supplies the
//! date for each trailing column and is validated up front: a file whose
//! header does not carry the recognized region prefix aborts the whole
//! run, unlike the daily variant's skip-and-continue policy.
//!
//! ## Architecture
//!
//! - [`parser`] - Header validation, per-row scanning, and cell emission

pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::TimeSeriesImporter;
