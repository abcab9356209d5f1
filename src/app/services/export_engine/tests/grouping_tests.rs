//! Tests for part grouping and representative selection

use super::create_test_record;
use crate::app::services::export_engine::grouping::group_records;

#[test]
fn test_case_insensitive_grouping_keeps_first_seen_casing() {
    let records = vec![
        create_test_record("abc", 1),
        create_test_record("ABC", 2),
        create_test_record(" Abc ", 3),
    ];

    let groups = group_records(&records);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].key, "abc");
    assert_eq!(groups[0].members.len(), 3);
}

#[test]
fn test_blank_part_numbers_excluded() {
    let records = vec![
        create_test_record("", 1),
        create_test_record("   ", 2),
        create_test_record("WIDGET", 3),
    ];

    let groups = group_records(&records);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].key, "WIDGET");
    assert_eq!(groups[0].members.len(), 1);
}

#[test]
fn test_groups_ordered_case_insensitively() {
    let records = vec![
        create_test_record("Widget-B", 1),
        create_test_record("widget-a", 2),
        create_test_record("ANCHOR", 3),
    ];

    let groups = group_records(&records);
    let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["ANCHOR", "widget-a", "Widget-B"]);
}

#[test]
fn test_representative_is_lowest_sequence() {
    let records = vec![
        create_test_record("WIDGET", 5),
        create_test_record("widget", 2),
        create_test_record("WIDGET", 9),
    ];

    let groups = group_records(&records);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].representative().sequence, 2);
}

#[test]
fn test_representative_tie_breaks_to_input_order() {
    let mut first = create_test_record("WIDGET", 1);
    first.length_in = Some(10.0);
    let mut second = create_test_record("WIDGET", 1);
    second.length_in = Some(99.0);

    let records = [first, second];
    let groups = group_records(&records);
    assert_eq!(groups[0].representative().length_in, Some(10.0));
}

#[test]
fn test_empty_input_produces_no_groups() {
    assert!(group_records(&[]).is_empty());
}

#[test]
fn test_trimmed_key_merges_with_untrimmed() {
    let records = vec![
        create_test_record("  PART-7", 4),
        create_test_record("PART-7  ", 1),
    ];

    let groups = group_records(&records);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].key, "PART-7");
    assert_eq!(groups[0].representative().sequence, 1);
}
