//! Field parsing utilities for capture store records
//!
//! Helper functions for reading typed values out of a CSV record through the
//! header column mapping. Optional measurement fields tolerate blanks and
//! junk; required fields produce a data validation error for the record.

use super::column_mapping::ColumnMapping;
use crate::{Error, Result};
use csv::StringRecord;

/// Get a required field value from a record
pub fn get_required_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Result<&'a str> {
    let index = mapping.index_of(field_name).ok_or_else(|| {
        Error::data_validation(format!("required column '{field_name}' not found"))
    })?;

    let value = record.get(index).ok_or_else(|| {
        Error::data_validation(format!("no value for required column '{field_name}'"))
    })?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::data_validation(format!(
            "empty value for required column '{field_name}'"
        )));
    }

    Ok(trimmed)
}

/// Get an optional field value, trimmed, with blanks as `None`
pub fn get_optional_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<&'a str> {
    mapping
        .index_of(field_name)
        .and_then(|index| record.get(index))
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

/// Get a field value exactly as stored, without trimming
///
/// Part numbers keep their surrounding whitespace here; normalization is the
/// grouper's job.
pub fn get_raw_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<&'a str> {
    mapping
        .index_of(field_name)
        .and_then(|index| record.get(index))
}

/// Parse a required i32 field from a record
pub fn parse_required_i32(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Result<i32> {
    let value = get_required_field(record, mapping, field_name)?;

    value.parse::<i32>().map_err(|error| {
        Error::data_validation(format!(
            "invalid integer for {field_name}: '{value}' ({error})"
        ))
    })
}

/// Parse an optional f64 field from a record; unparseable text reads as `None`
pub fn parse_optional_f64(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<f64> {
    get_optional_field(record, mapping, field_name).and_then(|value| value.parse::<f64>().ok())
}

/// Parse an optional string field from a record
pub fn parse_optional_string(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<String> {
    get_optional_field(record, mapping, field_name).map(|value| value.to_string())
}
