//! Daily report scanning and row parsing.
//!
//! Daily report files are headerless from the reader's point of view:
//! header rows appear in-band and are detected per row, and early exports
//! mixed header conventions within the same directory. Rows are therefore
//! read as raw string records and interpreted positionally.

use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::Result;
use crate::app::models::{DataPoint, Measure};
use crate::app::services::carbon::CarbonEmitter;
use crate::app::services::date_formats::{
    FALLBACK_TIMESTAMP, epoch_seconds, parse_daily_timestamp,
};
use crate::app::services::metric_path::metric_path;
use crate::app::services::stats::ImportStats;
use crate::constants::{
    DAILY_MIN_FIELDS, LAST_UPDATE_HEADER, REGION_HEADER_PREFIX, REPORT_FILE_DATE_FORMAT,
};

/// All calendar dates from `since` (inclusive) to `now` (exclusive).
///
/// Dates are anchored at midnight, so the date containing `now` is still
/// included. The bound is captured once by the caller; the scan never
/// consults the wall clock itself, which keeps termination deterministic.
pub fn date_range(since: NaiveDate, now: NaiveDateTime) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(since), |date| date.succ_opt())
        .take_while(move |date| date.and_time(NaiveTime::MIN) < now)
}

/// Importer for the per-date daily report files
#[derive(Debug)]
pub struct DailyReportImporter {
    reports_dir: PathBuf,
    since: NaiveDate,
    now: NaiveDateTime,
}

impl DailyReportImporter {
    /// Create an importer scanning `reports_dir` from `since` up to `now`
    pub fn new(reports_dir: impl Into<PathBuf>, since: NaiveDate, now: NaiveDateTime) -> Self {
        Self {
            reports_dir: reports_dir.into(),
            since,
            now,
        }
    }

    /// Scan the date range and emit metrics for every accepted row.
    ///
    /// A date with no backing file is logged and skipped; the scan always
    /// runs to the end of the range.
    pub fn run<W: Write>(&self, emitter: &mut CarbonEmitter<W>) -> Result<ImportStats> {
        let mut stats = ImportStats::new();

        for date in date_range(self.since, self.now) {
            let path = self.report_path(date);
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(_) => {
                    warn!("No report file for {}, skipping", date);
                    stats.files_missing += 1;
                    continue;
                }
            };

            debug!("Importing daily report {}", path.display());
            stats.files_processed += 1;
            self.import_reader(file, emitter, &mut stats);
        }

        Ok(stats)
    }

    /// Import every row of one report from an open reader.
    ///
    /// Exposed separately so tests can feed CSV content without touching
    /// the filesystem.
    pub fn import_reader<R: Read, W: Write>(
        &self,
        reader: R,
        emitter: &mut CarbonEmitter<W>,
        stats: &mut ImportStats,
    ) {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        for result in csv_reader.records() {
            stats.records_read += 1;
            match result {
                Ok(record) => self.import_record(&record, emitter, stats),
                Err(e) => {
                    warn!("Failed to parse CSV record: {}", e);
                    stats.records_skipped += 1;
                }
            }
        }
    }

    /// Apply the row policy to one record and emit its metrics
    fn import_record<W: Write>(
        &self,
        record: &StringRecord,
        emitter: &mut CarbonEmitter<W>,
        stats: &mut ImportStats,
    ) {
        if record.len() < DAILY_MIN_FIELDS {
            warn!("Invalid row: {:?}", record);
            stats.records_skipped += 1;
            return;
        }

        if is_header_record(record) {
            stats.records_skipped += 1;
            return;
        }

        let region = record.get(0).unwrap_or_default();
        let country = record.get(1).unwrap_or_default();
        let last_update = record.get(2).unwrap_or_default();

        let timestamp = match parse_daily_timestamp(last_update) {
            Some(parsed) => epoch_seconds(parsed),
            None => {
                warn!(
                    "Failed to parse date '{}', falling back to the epoch start",
                    last_update
                );
                stats.timestamps_defaulted += 1;
                FALLBACK_TIMESTAMP
            }
        };

        for measure in Measure::DAILY {
            let value = record.get(measure.daily_field_index()).unwrap_or_default();
            let metric = metric_path(country, region, measure);
            debug!("Adding: {} for timestamp {}", metric, timestamp);

            let point = DataPoint::new(metric, value, timestamp);
            match emitter.send(&point) {
                Ok(()) => stats.metrics_emitted += 1,
                Err(_) => stats.send_errors += 1,
            }
        }
    }

    /// Expected report file path for one date
    fn report_path(&self, date: NaiveDate) -> PathBuf {
        let filename = format!("{}.csv", date.format(REPORT_FILE_DATE_FORMAT));
        self.reports_dir.join(filename)
    }
}

/// Detect an in-band header row.
///
/// Early exports repeated the header inside some files; a row is a header
/// when its first field carries the region header prefix or its third
/// field is the literal last-update label.
pub fn is_header_record(record: &StringRecord) -> bool {
    let first = record.get(0).unwrap_or_default();
    let third = record.get(2).unwrap_or_default();
    first.starts_with(REGION_HEADER_PREFIX) || third == LAST_UPDATE_HEADER
}
