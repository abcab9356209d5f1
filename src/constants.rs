//! Application constants for the part feed exporter
//!
//! This module contains the export schema, unit vocabulary, conversion
//! factors, timestamp layouts, and default values used throughout the
//! exporter.

// =============================================================================
// Export Feed Schema
// =============================================================================

/// Fixed export column names, in feed order. The downstream ERP import is
/// positional; the order and casing here must never change.
pub const EXPORT_COLUMNS: [&str; 25] = [
    "ITEM_ID",
    "ITEM_TYPE",
    "DESCRIPTION",
    "NET_LENGTH",
    "NET_WIDTH",
    "NET_HEIGHT",
    "NET_WEIGHT",
    "NET_VOLUME",
    "NET_DIM_WGT",
    "DIM_UNIT",
    "WGT_UNIT",
    "VOL_UNIT",
    "FACTOR",
    "SITE_ID",
    "TIME_STAMP",
    "OPT_INFO_1",
    "OPT_INFO_2",
    "OPT_INFO_3",
    "OPT_INFO_4",
    "OPT_INFO_5",
    "OPT_INFO_6",
    "OPT_INFO_7",
    "OPT_INFO_8",
    "IMAGE_FILE_NAME",
    "UPDATED",
];

/// Number of fields in every serialized feed row
pub const FIELD_COUNT: usize = EXPORT_COLUMNS.len();

/// Feed field delimiter
pub const DELIMITER: char = ',';

/// Feed line terminator, fixed regardless of host platform
pub const LINE_TERMINATOR: &str = "\r\n";

/// Rendering format for the TIME_STAMP column
pub const EXPORT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Maximum number of decimal places in formatted measurement values
pub const MEASUREMENT_DECIMALS: usize = 4;

// =============================================================================
// Unit Vocabulary and Conversion Factors
// =============================================================================

/// Recognized unit tokens, compared after lowercase normalization.
/// Any unrecognized token is treated as the base unit (inches/pounds).
pub mod units {
    pub const INCHES: &str = "in";
    pub const CENTIMETERS: &str = "cm";
    pub const POUNDS: &str = "lb";
    pub const KILOGRAMS: &str = "kg";
}

/// Centimeters per inch (exact by definition)
pub const CM_PER_INCH: f64 = 2.54;

/// Kilograms per avoirdupois pound (exact by definition)
pub const KG_PER_POUND: f64 = 0.45359237;

// =============================================================================
// Export Settings Defaults
// =============================================================================

/// Default dimensional-weight divisor, calibrated for inch/pound feeds
pub const DEFAULT_DIM_FACTOR: f64 = 166.0;

/// Tolerance used when checking whether a configured factor still equals the
/// inch/pound default
pub const FACTOR_TOLERANCE: f64 = 1e-3;

/// Default SITE_ID column value
pub const DEFAULT_SITE_ID: &str = "733";

/// Default OPT_INFO_2 / OPT_INFO_3 column value
pub const DEFAULT_OPT_INFO: &str = "Y";

// =============================================================================
// Capture Timestamp Layouts
// =============================================================================

/// Known capture-station timestamp layouts carrying a time component,
/// tried in order; first match wins
pub const CAPTURE_DATETIME_LAYOUTS: &[&str] =
    &["%Y%m%d_%H%M%S", "%Y%m%d_%H%M", "%Y-%m-%d %H:%M:%S"];

/// Known date-only capture timestamp layout
pub const CAPTURE_DATE_LAYOUT: &str = "%m/%d/%Y";

// =============================================================================
// Capture Store File Layout
// =============================================================================

/// Column names of the capture-station record file
pub mod capture_columns {
    pub const PART_NUMBER: &str = "part_number";
    pub const SEQUENCE: &str = "sequence";
    pub const LENGTH_IN: &str = "length_in";
    pub const DEPTH_IN: &str = "depth_in";
    pub const HEIGHT_IN: &str = "height_in";
    pub const WEIGHT_LB: &str = "weight_lb";
    pub const TIME_STAMP: &str = "time_stamp";

    /// Columns that must be present in the capture store header
    pub const REQUIRED: &[&str] = &[PART_NUMBER, SEQUENCE];
}

/// Default export feed file name when no output path is given
pub const DEFAULT_EXPORT_FILE_NAME: &str = "item_export.csv";

/// Directory name under the platform data dir holding capture station output
pub const DEFAULT_STORE_DIR: &str = "partfeed";

/// Default capture store file name
pub const DEFAULT_STORE_FILE_NAME: &str = "captures.csv";
