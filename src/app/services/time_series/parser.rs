//! Wide-format time-series scanning and cell emission.
//!
//! Each data row fans out into one metric per date column, so a single
//! region row can produce hundreds of lines. The header row is read once
//! per file and each trailing cell is resolved against it by position.

use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use crate::app::models::{DataPoint, Measure};
use crate::app::services::carbon::CarbonEmitter;
use crate::app::services::date_formats::{
    FALLBACK_TIMESTAMP, epoch_seconds, parse_time_series_date,
};
use crate::app::services::metric_path::metric_path;
use crate::app::services::stats::ImportStats;
use crate::constants::{REGION_HEADER_PREFIX, TIME_SERIES_FIRST_DATE_COLUMN, time_series_filename};
use crate::{Error, Result};

/// Importer for the global time-series files
#[derive(Debug)]
pub struct TimeSeriesImporter {
    series_dir: PathBuf,
}

impl TimeSeriesImporter {
    /// Create an importer reading from the time-series directory
    pub fn new(series_dir: impl Into<PathBuf>) -> Self {
        Self {
            series_dir: series_dir.into(),
        }
    }

    /// Import both global files and emit one metric per (region, date) cell.
    ///
    /// The file list is fixed, so an unreadable file or a malformed header
    /// row is fatal for the whole run.
    pub fn run<W: Write>(&self, emitter: &mut CarbonEmitter<W>) -> Result<ImportStats> {
        let mut stats = ImportStats::new();

        for measure in Measure::TIME_SERIES {
            let path = self.series_dir.join(time_series_filename(measure.as_str()));
            info!("Importing time series {}", path.display());

            let file = File::open(&path).map_err(|e| {
                Error::io(format!("failed to open time series file {}", path.display()), e)
            })?;
            stats.files_processed += 1;

            self.import_reader(file, &path.display().to_string(), measure, emitter, &mut stats)?;
        }

        Ok(stats)
    }

    /// Import every row of one file from an open reader.
    ///
    /// Exposed separately so tests can feed CSV content without touching
    /// the filesystem.
    pub fn import_reader<R: Read, W: Write>(
        &self,
        reader: R,
        file_label: &str,
        measure: Measure,
        emitter: &mut CarbonEmitter<W>,
        stats: &mut ImportStats,
    ) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| Error::csv_parsing(file_label, "failed to read header row", Some(e)))?
            .clone();

        let first_column = headers.get(0).unwrap_or_default();
        if !first_column.starts_with(REGION_HEADER_PREFIX) {
            return Err(Error::header_validation(
                file_label,
                format!(
                    "expected first column to start with '{REGION_HEADER_PREFIX}', found '{first_column}'"
                ),
            ));
        }

        for result in csv_reader.records() {
            stats.records_read += 1;
            match result {
                Ok(record) => self.import_record(&record, &headers, measure, emitter, stats),
                Err(e) => {
                    warn!("Failed to parse CSV record: {}", e);
                    stats.records_skipped += 1;
                }
            }
        }

        Ok(())
    }

    /// Emit one metric per date cell of one region row
    fn import_record<W: Write>(
        &self,
        record: &StringRecord,
        headers: &StringRecord,
        measure: Measure,
        emitter: &mut CarbonEmitter<W>,
        stats: &mut ImportStats,
    ) {
        if record.len() < TIME_SERIES_FIRST_DATE_COLUMN {
            warn!("Invalid row: {:?}", record);
            stats.records_skipped += 1;
            return;
        }

        let region = record.get(0).unwrap_or_default();
        let country = record.get(1).unwrap_or_default();
        let metric = metric_path(country, region, measure);

        for index in TIME_SERIES_FIRST_DATE_COLUMN..record.len() {
            let value = record.get(index).unwrap_or_default();

            // A cell past the header row's width has no date label
            let Some(date_label) = headers.get(index) else {
                warn!(
                    "Cell {} of row {:?} has no date column in the header, skipping",
                    index, region
                );
                continue;
            };

            let timestamp = match parse_time_series_date(date_label) {
                Some(parsed) => epoch_seconds(parsed),
                None => {
                    warn!(
                        "Failed to parse date '{}', falling back to the epoch start",
                        date_label
                    );
                    stats.timestamps_defaulted += 1;
                    FALLBACK_TIMESTAMP
                }
            };

            debug!("Adding: {} for timestamp {}", metric, timestamp);
            let point = DataPoint::new(metric.clone(), value, timestamp);
            match emitter.send(&point) {
                Ok(()) => stats.metrics_emitted += 1,
                Err(_) => stats.send_errors += 1,
            }
        }
    }
}
