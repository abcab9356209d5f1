//! Tests for the export engine
//!
//! Unit and pipeline tests for grouping, conversion, formatting, row
//! assembly, serialization, and orchestration.

pub mod engine_tests;
pub mod grouping_tests;

use crate::app::models::CaptureRecord;
use crate::config::ExportSettings;

/// Create a capture record with a part number and sequence, no measurements
pub fn create_test_record(part_number: &str, sequence: i32) -> CaptureRecord {
    CaptureRecord::new(part_number, sequence)
}

/// Create a fully measured capture record
pub fn create_measured_record(
    part_number: &str,
    sequence: i32,
    length_in: f64,
    depth_in: f64,
    height_in: f64,
    weight_lb: f64,
) -> CaptureRecord {
    CaptureRecord {
        part_number: part_number.to_string(),
        sequence,
        length_in: Some(length_in),
        depth_in: Some(depth_in),
        height_in: Some(height_in),
        weight_lb: Some(weight_lb),
        time_stamp: Some("20240115_103000".to_string()),
    }
}

/// Default inch/pound settings
pub fn create_test_settings() -> ExportSettings {
    ExportSettings::default()
}
