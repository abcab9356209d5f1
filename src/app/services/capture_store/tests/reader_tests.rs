//! Tests for the capture store file reader

use super::{sample_store_content, write_store_file};
use crate::Error;
use crate::app::services::capture_store::CaptureFileReader;
use tempfile::TempDir;

#[test]
fn test_load_well_formed_store() {
    let dir = TempDir::new().unwrap();
    let path = write_store_file(&dir, sample_store_content());

    let (records, stats) = CaptureFileReader::new(&path).load().unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(stats.records_loaded, 3);
    assert_eq!(stats.records_skipped, 0);

    assert_eq!(records[0].part_number, "WIDGET-42");
    assert_eq!(records[0].sequence, 1);
    assert_eq!(records[0].length_in, Some(10.0));
    assert_eq!(records[0].weight_lb, Some(3.0));
    assert_eq!(records[0].time_stamp.as_deref(), Some("20240115_103000"));

    // Blank optional fields read as None
    assert_eq!(records[2].part_number, "ANCHOR-7");
    assert_eq!(records[2].length_in, None);
    assert_eq!(records[2].weight_lb, Some(1.25));
    assert_eq!(records[2].time_stamp, None);
}

#[test]
fn test_part_number_whitespace_preserved() {
    let dir = TempDir::new().unwrap();
    let path = write_store_file(
        &dir,
        "part_number,sequence\n\
         \" WIDGET-42 \",1\n",
    );

    let (records, _) = CaptureFileReader::new(&path).load().unwrap();
    assert_eq!(records[0].part_number, " WIDGET-42 ");
}

#[test]
fn test_columns_resolved_by_name_not_position() {
    let dir = TempDir::new().unwrap();
    let path = write_store_file(
        &dir,
        "sequence,weight_lb,part_number,station_id\n\
         3,2.5,WIDGET-42,S1\n",
    );

    let (records, _) = CaptureFileReader::new(&path).load().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].part_number, "WIDGET-42");
    assert_eq!(records[0].sequence, 3);
    assert_eq!(records[0].weight_lb, Some(2.5));
    assert_eq!(records[0].length_in, None);
}

#[test]
fn test_bad_sequence_skips_record_and_continues() {
    let dir = TempDir::new().unwrap();
    let path = write_store_file(
        &dir,
        "part_number,sequence,length_in\n\
         WIDGET-42,not-a-number,10.0\n\
         ANCHOR-7,1,4.0\n",
    );

    let (records, stats) = CaptureFileReader::new(&path).load().unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].part_number, "ANCHOR-7");
    assert_eq!(stats.records_loaded, 1);
    assert_eq!(stats.records_skipped, 1);
    assert!(stats.skip_messages[0].contains("line 2"));
}

#[test]
fn test_unparseable_measurement_reads_as_none() {
    let dir = TempDir::new().unwrap();
    let path = write_store_file(
        &dir,
        "part_number,sequence,length_in\n\
         WIDGET-42,1,garbage\n",
    );

    let (records, stats) = CaptureFileReader::new(&path).load().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].length_in, None);
    assert_eq!(stats.records_skipped, 0);
}

#[test]
fn test_missing_required_column_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_store_file(
        &dir,
        "part_number,length_in\n\
         WIDGET-42,10.0\n",
    );

    let result = CaptureFileReader::new(&path).load();
    assert!(matches!(result, Err(Error::CaptureFormat { .. })));
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let result = CaptureFileReader::new(dir.path().join("missing.csv")).load();
    assert!(matches!(result, Err(Error::CsvParsing { .. })));
}

#[test]
fn test_blank_part_number_kept_for_grouper_accounting() {
    let dir = TempDir::new().unwrap();
    let path = write_store_file(
        &dir,
        "part_number,sequence\n\
         ,1\n\
         WIDGET-42,2\n",
    );

    let (records, stats) = CaptureFileReader::new(&path).load().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].part_number, "");
    assert_eq!(stats.records_loaded, 2);
}
