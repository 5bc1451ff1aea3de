//! Runtime configuration for import runs.
//!
//! Resolves CLI flags and built-in defaults into the concrete input paths
//! and backend address a run operates on. The CSSE repository layout is
//! fixed, so the accessors construct exact paths rather than discovering
//! them.

use crate::app::models::Measure;
use crate::constants::{
    CSSE_DATA_DIR_NAME, DAILY_REPORTS_DIR_NAME, TIME_SERIES_DIR_NAME, time_series_filename,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolved configuration shared by both import variants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root of the CSSE repository checkout
    pub data_dir: PathBuf,

    /// `host:port` of the carbon-cache line protocol listener
    pub carbon_address: String,
}

impl Config {
    /// Create a configuration from a data directory and backend address
    pub fn new(data_dir: impl Into<PathBuf>, carbon_address: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            carbon_address: carbon_address.into(),
        }
    }

    /// Directory holding per-date daily report files
    pub fn daily_reports_dir(&self) -> PathBuf {
        self.data_dir
            .join(CSSE_DATA_DIR_NAME)
            .join(DAILY_REPORTS_DIR_NAME)
    }

    /// Directory holding the global time-series files
    pub fn time_series_dir(&self) -> PathBuf {
        self.data_dir
            .join(CSSE_DATA_DIR_NAME)
            .join(TIME_SERIES_DIR_NAME)
    }

    /// Path of the global time-series file for one measure
    pub fn time_series_file(&self, measure: Measure) -> PathBuf {
        self.time_series_dir()
            .join(time_series_filename(measure.as_str()))
    }
}
