//! Time-series import command
//!
//! Connects to the carbon backend and imports the two fixed global files.
//! Connection failure is fatal here as well; the original tooling this
//! replaces dropped every metric silently when the backend was down.

use std::time::Instant;

use tracing::{debug, info};

use super::shared::{report_summary, setup_logging};
use crate::Result;
use crate::app::services::carbon::CarbonEmitter;
use crate::app::services::stats::ImportStats;
use crate::app::services::time_series::TimeSeriesImporter;
use crate::cli::args::TimeseriesArgs;
use crate::config::Config;

/// Run the time-series import
pub fn run_timeseries(args: TimeseriesArgs) -> Result<ImportStats> {
    setup_logging(args.verbose, args.quiet)?;

    info!("Starting CSSE time-series import");
    debug!("Command line arguments: {:?}", args);

    let config = Config::new(args.data_dir, args.carbon);
    let mut emitter = CarbonEmitter::connect(&config.carbon_address)?;

    let start_time = Instant::now();
    let importer = TimeSeriesImporter::new(config.time_series_dir());
    let stats = importer.run(&mut emitter)?;

    report_summary("Time-series", &stats, start_time.elapsed());
    Ok(stats)
}
