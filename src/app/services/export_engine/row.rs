//! Export row assembly
//!
//! Builds the 25-field feed row for one part from its representative capture
//! record and the run's settings: static defaults, converted measurements,
//! derived volume and dimensional weight, and the parsed capture date.

use super::numeric::format_measurement;
use super::units::{convert_length, convert_weight};
use crate::app::models::CaptureRecord;
use crate::config::ExportSettings;
use crate::constants::{
    CAPTURE_DATE_LAYOUT, CAPTURE_DATETIME_LAYOUTS, EXPORT_DATE_FORMAT, FIELD_COUNT, units,
};
use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Field positions within an export row, in feed order
pub mod columns {
    pub const ITEM_ID: usize = 0;
    pub const ITEM_TYPE: usize = 1;
    pub const DESCRIPTION: usize = 2;
    pub const NET_LENGTH: usize = 3;
    pub const NET_WIDTH: usize = 4;
    pub const NET_HEIGHT: usize = 5;
    pub const NET_WEIGHT: usize = 6;
    pub const NET_VOLUME: usize = 7;
    pub const NET_DIM_WGT: usize = 8;
    pub const DIM_UNIT: usize = 9;
    pub const WGT_UNIT: usize = 10;
    pub const VOL_UNIT: usize = 11;
    pub const FACTOR: usize = 12;
    pub const SITE_ID: usize = 13;
    pub const TIME_STAMP: usize = 14;
    pub const OPT_INFO_1: usize = 15;
    pub const OPT_INFO_2: usize = 16;
    pub const OPT_INFO_3: usize = 17;
    pub const OPT_INFO_4: usize = 18;
    pub const OPT_INFO_5: usize = 19;
    pub const OPT_INFO_6: usize = 20;
    pub const OPT_INFO_7: usize = 21;
    pub const OPT_INFO_8: usize = 22;
    pub const IMAGE_FILE_NAME: usize = 23;
    pub const UPDATED: usize = 24;
}

/// One feed row: 25 field values in schema order, empty unless set
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    values: [String; FIELD_COUNT],
}

impl ExportRow {
    /// Create a row with every field set to the empty string
    pub fn new() -> Self {
        Self {
            values: std::array::from_fn(|_| String::new()),
        }
    }

    /// Set one field by position
    pub fn set(&mut self, column: usize, value: impl Into<String>) {
        self.values[column] = value.into();
    }

    /// Field values in feed order
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Default for ExportRow {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble the export row for one part
///
/// Measurement fields are populated only when a representative record
/// exists; missing optional measurements read as `0.0` and flow through
/// conversion and formatting like any other value. Transient rows exist only
/// for the duration of one serialization.
pub fn assemble_row(
    part_key: &str,
    representative: Option<&CaptureRecord>,
    settings: &ExportSettings,
) -> ExportRow {
    let mut row = ExportRow::new();

    // ITEM_ID is never quoted downstream; commas are stripped outright
    row.set(columns::ITEM_ID, part_key.replace(',', ""));

    if let Some(record) = representative {
        let length = convert_length(
            record.length_in.unwrap_or(0.0),
            units::INCHES,
            &settings.dim_unit,
        );
        let width = convert_length(
            record.depth_in.unwrap_or(0.0),
            units::INCHES,
            &settings.dim_unit,
        );
        let height = convert_length(
            record.height_in.unwrap_or(0.0),
            units::INCHES,
            &settings.dim_unit,
        );
        let weight = convert_weight(
            record.weight_lb.unwrap_or(0.0),
            units::POUNDS,
            &settings.wgt_unit,
        );

        row.set(columns::NET_LENGTH, format_measurement(length));
        row.set(columns::NET_WIDTH, format_measurement(width));
        row.set(columns::NET_HEIGHT, format_measurement(height));
        row.set(columns::NET_WEIGHT, format_measurement(weight));

        // Volume from the converted, unformatted dimensions; all three must
        // be strictly positive or the volume is zero
        let volume = if length > 0.0 && width > 0.0 && height > 0.0 {
            length * width * height
        } else {
            0.0
        };
        row.set(columns::NET_VOLUME, format_measurement(volume));

        let dim_weight = if volume > 0.0 && settings.factor > 0.0 {
            volume / settings.factor
        } else {
            0.0
        };
        row.set(columns::NET_DIM_WGT, format_measurement(dim_weight));
    }

    row.set(columns::DIM_UNIT, settings.dim_unit.clone());
    row.set(columns::WGT_UNIT, settings.wgt_unit.clone());
    row.set(columns::VOL_UNIT, settings.vol_unit.clone());
    row.set(columns::FACTOR, format!("{}", settings.factor.round() as i64));
    row.set(columns::SITE_ID, settings.site_id.clone());
    row.set(columns::TIME_STAMP, export_time_stamp(representative));
    row.set(columns::OPT_INFO_2, settings.opt_info2.clone());
    row.set(columns::OPT_INFO_3, settings.opt_info3.clone());
    row.set(columns::OPT_INFO_8, "0");
    row.set(columns::UPDATED, "N");

    row
}

/// Render the TIME_STAMP column for a part
///
/// Falls back to the current local date when the representative is missing
/// or its raw timestamp matches no known layout.
fn export_time_stamp(representative: Option<&CaptureRecord>) -> String {
    let parsed = representative
        .and_then(|record| record.time_stamp.as_deref())
        .and_then(parse_capture_date);

    let date = parsed.unwrap_or_else(|| {
        debug!("no parseable capture timestamp, falling back to current date");
        Local::now().date_naive()
    });

    date.format(EXPORT_DATE_FORMAT).to_string()
}

/// Parse a raw capture-station timestamp against the known layouts
///
/// Layouts carrying a time component are tried in order, then the date-only
/// layout; the first match wins.
pub fn parse_capture_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for layout in CAPTURE_DATETIME_LAYOUTS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Some(stamp.date());
        }
    }

    NaiveDate::parse_from_str(trimmed, CAPTURE_DATE_LAYOUT).ok()
}
