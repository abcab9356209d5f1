//! Capture store file reader
//!
//! Loads dimensioning-station capture records from a CSV file. Structural
//! failures (unreadable file, missing required columns) are fatal to the
//! load; a record that fails field parsing is skipped, counted, and the load
//! continues.

use super::column_mapping::ColumnMapping;
use super::field_parsers::{
    get_raw_field, parse_optional_f64, parse_optional_string, parse_required_i32,
};
use crate::app::models::CaptureRecord;
use crate::constants::capture_columns;
use crate::{Error, Result};
use csv::StringRecord;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Statistics for one capture store load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadStats {
    /// Data lines read from the file
    pub lines_read: usize,
    /// Records successfully loaded
    pub records_loaded: usize,
    /// Records skipped for parse failures
    pub records_skipped: usize,
    /// Skip reasons for diagnostics
    pub skip_messages: Vec<String>,
}

/// Reader for capture-station record files
#[derive(Debug, Clone)]
pub struct CaptureFileReader {
    path: PathBuf,
}

impl CaptureFileReader {
    /// Create a reader for a capture store file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the capture store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all capture records from the file
    pub fn load(&self) -> Result<(Vec<CaptureRecord>, ReadStats)> {
        let file_label = self.path.display().to_string();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|error| {
                Error::csv_parsing(
                    file_label.as_str(),
                    "failed to open capture store",
                    Some(error),
                )
            })?;

        let headers = reader.headers().map_err(|error| {
            Error::csv_parsing(
                file_label.as_str(),
                "failed to read header line",
                Some(error),
            )
        })?;
        let mapping = ColumnMapping::from_headers(headers, &file_label)?;

        let mut records = Vec::new();
        let mut stats = ReadStats::default();

        for (line_index, result) in reader.records().enumerate() {
            stats.lines_read += 1;
            // Header is line 1; data starts on line 2
            let line_number = line_index + 2;

            let record = match result {
                Ok(record) => record,
                Err(error) => {
                    skip(&mut stats, line_number, &format!("unreadable line ({error})"));
                    continue;
                }
            };

            match parse_capture_record(&record, &mapping) {
                Ok(capture) => {
                    records.push(capture);
                    stats.records_loaded += 1;
                }
                Err(error) => {
                    skip(&mut stats, line_number, &error.to_string());
                }
            }
        }

        info!(
            "Loaded {} capture records from {} ({} skipped)",
            stats.records_loaded, file_label, stats.records_skipped
        );

        Ok((records, stats))
    }
}

fn skip(stats: &mut ReadStats, line_number: usize, reason: &str) {
    debug!("skipping capture record at line {line_number}: {reason}");
    stats.records_skipped += 1;
    stats
        .skip_messages
        .push(format!("line {line_number}: {reason}"));
}

/// Parse one capture record from a CSV data line
fn parse_capture_record(record: &StringRecord, mapping: &ColumnMapping) -> Result<CaptureRecord> {
    // Blank part numbers are kept; the grouper excludes them with its own
    // accounting
    let part_number = get_raw_field(record, mapping, capture_columns::PART_NUMBER)
        .unwrap_or_default()
        .to_string();

    let sequence = parse_required_i32(record, mapping, capture_columns::SEQUENCE)?;

    Ok(CaptureRecord {
        part_number,
        sequence,
        length_in: parse_optional_f64(record, mapping, capture_columns::LENGTH_IN),
        depth_in: parse_optional_f64(record, mapping, capture_columns::DEPTH_IN),
        height_in: parse_optional_f64(record, mapping, capture_columns::HEIGHT_IN),
        weight_lb: parse_optional_f64(record, mapping, capture_columns::WEIGHT_LB),
        time_stamp: parse_optional_string(record, mapping, capture_columns::TIME_STAMP),
    })
}
