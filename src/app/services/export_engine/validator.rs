//! Structural validation of serialized feed rows
//!
//! Every row must serialize to exactly 25 fields before it reaches the sink.
//! The check runs on the already-escaped text so a future schema edit that
//! breaks column alignment is caught here instead of corrupting the
//! downstream import.

use crate::constants::{DELIMITER, FIELD_COUNT};
use crate::{Error, Result};

/// Count the fields of a serialized row, honoring quoting
///
/// Delimiters inside quoted fields do not separate fields; doubled quotes
/// inside a quoted field toggle the quote state twice and fall out of the
/// count naturally.
pub fn field_count(row: &str) -> usize {
    let mut fields = 1usize;
    let mut in_quotes = false;

    for ch in row.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ch if ch == DELIMITER && !in_quotes => fields += 1,
            _ => {}
        }
    }

    fields
}

/// Validate a serialized row against the fixed field count
///
/// A failing row identifies the offending part so the caller can report it
/// and continue with the next group.
pub fn validate_row(part: &str, row: &str) -> Result<()> {
    let fields = field_count(row);
    if fields == FIELD_COUNT {
        Ok(())
    } else {
        Err(Error::row_validation(part, fields))
    }
}
