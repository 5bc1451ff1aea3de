//! Daily report import command
//!
//! Validates the `--since` flag, connects to the carbon backend, and runs
//! the per-date scan with an upper bound captured once at startup.

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use super::shared::{report_summary, setup_logging};
use crate::app::services::carbon::CarbonEmitter;
use crate::app::services::daily_report::DailyReportImporter;
use crate::app::services::stats::ImportStats;
use crate::cli::args::DailyArgs;
use crate::config::Config;
use crate::constants::SINCE_DATE_FORMAT;
use crate::{Error, Result};

/// Run the daily report import
pub fn run_daily(args: DailyArgs) -> Result<ImportStats> {
    setup_logging(args.verbose, args.quiet)?;

    info!("Starting CSSE daily report import");
    debug!("Command line arguments: {:?}", args);

    // An unparseable start date is fatal before any processing begins
    let since = NaiveDate::parse_from_str(&args.since, SINCE_DATE_FORMAT)
        .map_err(|e| Error::date_parsing(format!("invalid --since value '{}'", args.since), e))?;

    let config = Config::new(args.data_dir, args.carbon);
    let mut emitter = CarbonEmitter::connect(&config.carbon_address)?;

    // Capture the scan's upper bound once; the date range never re-reads
    // the wall clock
    let now = Utc::now().naive_utc();

    let start_time = Instant::now();
    let importer = DailyReportImporter::new(config.daily_reports_dir(), since, now);
    let stats = importer.run(&mut emitter)?;

    report_summary("Daily report", &stats, start_time.elapsed());
    Ok(stats)
}
