//! CSSE Importer Library
//!
//! A Rust library for forwarding Johns Hopkins CSSE COVID-19 CSV reports
//! to a Carbon/Graphite metrics backend over the plaintext line protocol.
//!
//! This library provides tools for:
//! - Parsing per-date daily report CSVs with loosely structured rows
//! - Parsing wide-format time-series CSVs (one column per date)
//! - Normalizing free-text labels into dotted metric path segments
//! - Resolving inconsistent report timestamps via ordered format fallback
//! - Emitting `metric value timestamp` lines over a TCP connection

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod carbon;
        pub mod daily_report;
        pub mod date_formats;
        pub mod metric_path;
        pub mod stats;
        pub mod time_series;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DataPoint, Measure};
pub use app::services::stats::ImportStats;
pub use config::Config;

/// Result type alias for the CSSE importer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for CSSE import operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Carbon backend connection error
    #[error("Failed to connect to carbon backend at '{address}': {message}")]
    Connection {
        address: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Header row validation failure in a fixed input file
    #[error("Header validation failed for file '{file}': {message}")]
    HeaderValidation { file: String, message: String },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a carbon connection error
    pub fn connection(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Connection {
            address: address.into(),
            message: source.to_string(),
            source,
        }
    }

    /// Create a header validation error
    pub fn header_validation(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::HeaderValidation {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn date_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}
