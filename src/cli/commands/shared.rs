//! Shared helpers for CSSE importer commands
//!
//! Logging setup and the end-of-run summary report used by both import
//! variants.

use std::time::Duration;

use tracing::{info, warn};

use crate::Result;
use crate::app::services::stats::ImportStats;

/// Set up tracing with verbosity from the command flags.
///
/// `RUST_LOG` overrides the flag-derived filter when set.
pub fn setup_logging(verbose: u8, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csse_importer={log_level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    Ok(())
}

/// Log the end-of-run summary for an import.
///
/// The defaulted-timestamp count is reported prominently: those rows were
/// emitted with the epoch-start timestamp and are easy to miss downstream.
pub fn report_summary(variant: &str, stats: &ImportStats, elapsed: Duration) {
    info!("{} import finished in {:.1}s", variant, elapsed.as_secs_f64());
    info!("Files processed:   {}", stats.files_processed);
    if stats.files_missing > 0 {
        info!("Files missing:     {}", stats.files_missing);
    }
    info!("Records read:      {}", stats.records_read);
    info!("Records skipped:   {}", stats.records_skipped);
    info!("Metrics emitted:   {}", stats.metrics_emitted);

    if stats.timestamps_defaulted > 0 {
        warn!(
            "{} rows had unreadable timestamps and were emitted at the epoch start",
            stats.timestamps_defaulted
        );
    }
    if stats.send_errors > 0 {
        warn!(
            "{} metric lines failed to send to the backend",
            stats.send_errors
        );
    }
}
