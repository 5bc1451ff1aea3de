//! Run statistics for import operations.
//!
//! Counters accumulated across a run and reported once at the end. The
//! defaulted-timestamp count exists because rows with unreadable
//! timestamps are still emitted, silently labeled with the epoch start;
//! surfacing how often that happened is the only way to spot it.

use serde::{Deserialize, Serialize};

/// Counters for one import run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportStats {
    /// Input files opened and scanned
    pub files_processed: usize,

    /// Dates in the scan range with no backing report file
    pub files_missing: usize,

    /// CSV records read across all files
    pub records_read: usize,

    /// Records skipped (too few fields, header rows, structural errors)
    pub records_skipped: usize,

    /// Metric lines written to the backend
    pub metrics_emitted: usize,

    /// Rows emitted with the epoch-start timestamp after all date formats
    /// failed
    pub timestamps_defaulted: usize,

    /// Line writes that failed mid-run (never surfaced as errors)
    pub send_errors: usize,
}

impl ImportStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of read records that produced metrics, as a percentage
    pub fn acceptance_rate(&self) -> f64 {
        if self.records_read == 0 {
            0.0
        } else {
            let accepted = self.records_read - self.records_skipped;
            (accepted as f64 / self.records_read as f64) * 100.0
        }
    }
}
