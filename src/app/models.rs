//! Data models for part feed export
//!
//! This module contains the capture record structure produced by the
//! dimensioning station. The export engine consumes these records as a plain
//! immutable snapshot; any change-notification machinery used by the capture
//! UI stays out of this type.

use serde::{Deserialize, Serialize};

/// One measurement capture of a physical part
///
/// A part may be captured several times (one record per image); the export
/// engine selects a single representative record per part. Measurements are
/// normalized upstream to inches and pounds; `None` means the value was not
/// measured for this capture.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CaptureRecord {
    /// Free-text part identifier; may carry surrounding whitespace
    pub part_number: String,

    /// Ordering key within a part's captures; not required to be unique
    pub sequence: i32,

    /// Measured length in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_in: Option<f64>,

    /// Measured depth in inches (exported as NET_WIDTH)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth_in: Option<f64>,

    /// Measured height in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_in: Option<f64>,

    /// Measured weight in pounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_lb: Option<f64>,

    /// Free-form capture timestamp in one of the known station layouts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_stamp: Option<String>,
}

impl CaptureRecord {
    /// Create a record with a part number and sequence, no measurements
    pub fn new(part_number: impl Into<String>, sequence: i32) -> Self {
        Self {
            part_number: part_number.into(),
            sequence,
            length_in: None,
            depth_in: None,
            height_in: None,
            weight_lb: None,
            time_stamp: None,
        }
    }

    /// Part number with surrounding whitespace removed
    pub fn trimmed_part_number(&self) -> &str {
        self.part_number.trim()
    }

    /// Check whether this record carries a usable part number
    pub fn has_part_number(&self) -> bool {
        !self.trimmed_part_number().is_empty()
    }

    /// Check whether any measurement was taken for this capture
    pub fn has_measurements(&self) -> bool {
        self.length_in.is_some()
            || self.depth_in.is_some()
            || self.height_in.is_some()
            || self.weight_lb.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> CaptureRecord {
        CaptureRecord {
            part_number: " WIDGET-42 ".to_string(),
            sequence: 3,
            length_in: Some(10.0),
            depth_in: Some(5.0),
            height_in: Some(2.0),
            weight_lb: Some(3.0),
            time_stamp: Some("20240115_103000".to_string()),
        }
    }

    #[test]
    fn test_trimmed_part_number() {
        let record = create_test_record();
        assert_eq!(record.trimmed_part_number(), "WIDGET-42");
        assert!(record.has_part_number());
    }

    #[test]
    fn test_blank_part_number() {
        let record = CaptureRecord::new("   ", 1);
        assert!(!record.has_part_number());

        let record = CaptureRecord::new("", 1);
        assert!(!record.has_part_number());
    }

    #[test]
    fn test_has_measurements() {
        assert!(create_test_record().has_measurements());

        let bare = CaptureRecord::new("WIDGET-42", 1);
        assert!(!bare.has_measurements());

        let mut weight_only = CaptureRecord::new("WIDGET-42", 1);
        weight_only.weight_lb = Some(1.25);
        assert!(weight_only.has_measurements());
    }

    #[test]
    fn test_serde_round_trip() {
        let record = create_test_record();
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: CaptureRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_serde_skips_missing_measurements() {
        let record = CaptureRecord::new("WIDGET-42", 1);
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("length_in"));
        assert!(!json.contains("time_stamp"));
    }
}
