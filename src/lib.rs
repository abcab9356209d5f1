//! Part Feed Exporter Library
//!
//! A Rust library for exporting part dimensioning capture records into a
//! fixed-schema CSV feed consumable by downstream logistics/ERP systems.
//!
//! This library provides tools for:
//! - Loading capture-station record files with header-mapped columns
//! - Grouping per-image capture records into one row per physical part
//! - Length/weight unit conversion and derived volume/dimensional weight
//! - Strict numeric formatting with blank-on-invalid semantics
//! - RFC4180-style CSV serialization with CRLF line termination
//! - Structural row validation and per-run export statistics

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod capture_store;
        pub mod export_engine;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::CaptureRecord;
pub use app::services::export_engine::{ExportMessage, ExportResult, ExportStats, Exporter};
pub use config::ExportSettings;

/// Result type alias for the part feed exporter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for part feed export operations
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

    /// Capture store format error
    #[error("capture store format error in file '{file}': {message}")]
    CaptureFormat { file: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Serialized export row has the wrong column count
    #[error(
        "export row for part '{part}' produced {fields} fields, expected {}",
        crate::constants::FIELD_COUNT
    )]
    RowValidation { part: String, fields: usize },

    /// Produced feed file failed a structural check
    #[error("feed validation failed for '{file}': {message}")]
    FeedValidation { file: String, message: String },
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

    /// Create a capture store format error
    pub fn capture_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CaptureFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a row validation error
    pub fn row_validation(part: impl Into<String>, fields: usize) -> Self {
        Self::RowValidation {
            part: part.into(),
            fields,
        }
    }

    /// Create a feed validation error
    pub fn feed_validation(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FeedValidation {
            file: file.into(),
            message: message.into(),
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
