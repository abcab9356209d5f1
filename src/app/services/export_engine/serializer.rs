//! CSV serialization for the export feed
//!
//! RFC4180-style quoting: a field is quoted if and only if it contains a
//! delimiter, a double quote, or a line break; embedded quotes are doubled.
//! The orchestrator appends the fixed CRLF terminator to every line it
//! writes, header included.

use crate::constants::{DELIMITER, EXPORT_COLUMNS};

/// Render the fixed feed header line
///
/// Column names contain no special characters, so the header is emitted
/// unescaped.
pub fn header_line() -> String {
    EXPORT_COLUMNS.join(",")
}

/// Escape one field value for the feed
pub fn escape_field(value: &str) -> String {
    if needs_quoting(value) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render an ordered field list into one delimited line, without terminator
pub fn serialize_row(values: &[String]) -> String {
    values
        .iter()
        .map(|value| escape_field(value))
        .collect::<Vec<_>>()
        .join(",")
}

fn needs_quoting(value: &str) -> bool {
    value
        .chars()
        .any(|ch| ch == DELIMITER || matches!(ch, '"' | '\r' | '\n'))
}
