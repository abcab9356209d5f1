//! Header column mapping for capture store files
//!
//! Capture station firmware revisions reorder and append columns, so fields
//! are resolved by header name rather than position.

use crate::constants::capture_columns;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// Mapping from normalized column name to record index
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    pub name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    /// Build a mapping from a header record, requiring the mandatory columns
    ///
    /// Column names are matched after trimming and lowercase normalization;
    /// unknown columns are ignored.
    pub fn from_headers(headers: &StringRecord, file: &str) -> Result<Self> {
        let mut name_to_index = HashMap::new();
        for (index, name) in headers.iter().enumerate() {
            name_to_index.insert(name.trim().to_lowercase(), index);
        }

        for required in capture_columns::REQUIRED {
            if !name_to_index.contains_key(*required) {
                return Err(Error::capture_format(
                    file,
                    format!("missing required column '{required}'"),
                ));
            }
        }

        Ok(Self { name_to_index })
    }

    /// Get the record index of a column, if present
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }
}
