//! Command-line argument definitions for the CSSE importer
//!
//! This module defines the complete CLI interface using the clap derive
//! API. The two import variants are separate subcommands with their own
//! flags; they intentionally stay independent because their failure
//! policies differ.

use crate::constants::{DEFAULT_CARBON_ADDRESS, DEFAULT_DATA_DIR, DEFAULT_SINCE_DATE};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the CSSE importer
///
/// Forwards Johns Hopkins CSSE COVID-19 CSV reports to a Carbon/Graphite
/// metrics backend over the plaintext line protocol.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "csse-importer",
    version,
    about = "Forward CSSE COVID-19 CSV reports to a Carbon/Graphite backend",
    long_about = "A batch tool that parses the Johns Hopkins CSSE COVID-19 CSV exports \
                  (per-date daily reports or the wide-format global time series) and \
                  forwards normalized metric/value/timestamp lines to a carbon-cache \
                  listener. The tool runs to completion and terminates; it is not a \
                  service."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the CSSE importer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Import per-date daily report files over a date range
    Daily(DailyArgs),
    /// Import the global time-series files (confirmed and deaths)
    Timeseries(TimeseriesArgs),
}

/// Arguments for the daily report import
#[derive(Debug, Clone, Parser)]
pub struct DailyArgs {
    /// Path to the CSSE repository checkout
    ///
    /// Daily reports are read from
    /// `<data-dir>/csse_covid_19_data/csse_covid_19_daily_reports/`.
    #[arg(
        long = "data-dir",
        value_name = "PATH",
        default_value = DEFAULT_DATA_DIR,
        help = "Path to where the CSVs are stored"
    )]
    pub data_dir: PathBuf,

    /// First date of the scan, inclusive
    ///
    /// The scan runs from this date up to the current date. Dates with no
    /// backing report file are skipped.
    #[arg(
        long = "since",
        value_name = "YYYY-MM-DD",
        default_value = DEFAULT_SINCE_DATE,
        help = "Import metrics since that date"
    )]
    pub since: String,

    /// Address of the carbon-cache plaintext listener
    #[arg(
        long = "carbon",
        value_name = "HOST:PORT",
        default_value = DEFAULT_CARBON_ADDRESS,
        help = "carbon-cache address to send metrics to"
    )]
    pub carbon: String,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Only show warnings and errors
    #[arg(short = 'q', long = "quiet", help = "Suppress informational output")]
    pub quiet: bool,
}

/// Arguments for the time-series import
#[derive(Debug, Clone, Parser)]
pub struct TimeseriesArgs {
    /// Path to the CSSE repository checkout
    ///
    /// Time-series files are read from
    /// `<data-dir>/csse_covid_19_data/csse_covid_19_time_series/`.
    #[arg(
        long = "data-dir",
        value_name = "PATH",
        default_value = DEFAULT_DATA_DIR,
        help = "Path to where the CSVs are stored"
    )]
    pub data_dir: PathBuf,

    /// Address of the carbon-cache plaintext listener
    #[arg(
        long = "carbon",
        value_name = "HOST:PORT",
        default_value = DEFAULT_CARBON_ADDRESS,
        help = "carbon-cache address to send metrics to"
    )]
    pub carbon: String,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Only show warnings and errors
    #[arg(short = 'q', long = "quiet", help = "Suppress informational output")]
    pub quiet: bool,
}
