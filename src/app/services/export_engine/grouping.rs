//! Grouping of capture records into one export group per physical part
//!
//! Parts are identified by trimmed, case-insensitive part number. A part may
//! be captured several times; the group's representative record (the one
//! whose measurements reach the feed) is the member with the lowest sequence
//! value, with ties resolved to input order.

use crate::app::models::CaptureRecord;
use std::collections::HashMap;
use tracing::debug;

/// One part's capture records, keyed by the first-seen trimmed part number
#[derive(Debug, Clone)]
pub struct PartGroup<'a> {
    /// Trimmed part number in its first-seen casing
    pub key: String,

    /// All member records, in input order; never empty
    pub members: Vec<&'a CaptureRecord>,
}

impl<'a> PartGroup<'a> {
    /// Member with the lowest sequence value; stable tie-break by input order
    pub fn representative(&self) -> &'a CaptureRecord {
        self.members
            .iter()
            .copied()
            .min_by_key(|record| record.sequence)
            .expect("a part group always holds at least one record")
    }
}

/// Group capture records by normalized part number
///
/// Records with an empty or whitespace-only part number are excluded
/// entirely. Output groups are ordered by part number, case-insensitive
/// ordinal ascending, so repeated exports of the same store are
/// byte-identical.
pub fn group_records(records: &[CaptureRecord]) -> Vec<PartGroup<'_>> {
    let mut index_by_key: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<PartGroup<'_>> = Vec::new();

    for record in records {
        let trimmed = record.trimmed_part_number();
        if trimmed.is_empty() {
            continue;
        }

        let normalized = trimmed.to_lowercase();
        match index_by_key.get(&normalized) {
            Some(&index) => groups[index].members.push(record),
            None => {
                index_by_key.insert(normalized, groups.len());
                groups.push(PartGroup {
                    key: trimmed.to_string(),
                    members: vec![record],
                });
            }
        }
    }

    groups.sort_by(|a, b| a.key.to_lowercase().cmp(&b.key.to_lowercase()));

    debug!(
        "Grouped {} capture records into {} parts",
        records.len(),
        groups.len()
    );

    groups
}
