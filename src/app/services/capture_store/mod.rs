//! Capture store access for the part feed exporter
//!
//! The dimensioning station persists one CSV line per capture image. This
//! module loads those files into [`CaptureRecord`](crate::CaptureRecord)
//! values for the export engine:
//!
//! - [`reader`] - File loading with per-record recovery and read statistics
//! - [`column_mapping`] - Header-name column resolution
//! - [`field_parsers`] - Typed field extraction helpers

pub mod column_mapping;
pub mod field_parsers;
pub mod reader;

#[cfg(test)]
mod tests;

pub use column_mapping::ColumnMapping;
pub use reader::{CaptureFileReader, ReadStats};
