//! Command implementations for the CSSE importer CLI
//!
//! Each import variant is implemented in its own module; this module
//! dispatches to the right one. The variants deliberately do not share a
//! run loop because their failure policies differ (missing daily files are
//! skipped, missing time-series files are fatal).

pub mod daily;
pub mod shared;
pub mod timeseries;

use crate::Result;
use crate::app::services::stats::ImportStats;
use crate::cli::args::Commands;

/// Dispatch a parsed subcommand to its implementation
pub fn run(command: Commands) -> Result<ImportStats> {
    match command {
        Commands::Daily(daily_args) => daily::run_daily(daily_args),
        Commands::Timeseries(timeseries_args) => timeseries::run_timeseries(timeseries_args),
    }
}
