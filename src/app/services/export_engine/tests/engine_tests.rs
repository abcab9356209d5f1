//! Tests for export orchestration

use super::{create_measured_record, create_test_record, create_test_settings};
use crate::app::services::export_engine::engine::{ExportMessage, Exporter};
use crate::app::services::export_engine::serializer::header_line;
use crate::config::ExportSettings;
use crate::constants::FIELD_COUNT;
use crate::{CaptureRecord, Error};
use std::io::Write;

fn export_to_string(
    records: &[CaptureRecord],
    settings: ExportSettings,
) -> (String, Vec<ExportMessage>) {
    let exporter = Exporter::new(settings);
    let mut sink: Vec<u8> = Vec::new();
    let mut messages = Vec::new();

    let result = exporter
        .export(records, &mut sink, None, |message| {
            messages.push(message.clone())
        })
        .unwrap();

    // The result counters always match the summary message
    assert_eq!(
        messages.last(),
        Some(&ExportMessage::Summary {
            exported: result.exported_count(),
            errors: result.error_count(),
        })
    );

    (String::from_utf8(sink).unwrap(), messages)
}

#[test]
fn test_empty_input_emits_header_only() {
    let (text, messages) = export_to_string(&[], create_test_settings());

    assert_eq!(text, format!("{}\r\n", header_line()));
    assert_eq!(
        messages,
        vec![ExportMessage::Summary {
            exported: 0,
            errors: 0
        }]
    );
}

#[test]
fn test_feed_is_byte_exact() {
    let mut second = create_measured_record("part-b", 1, 2.0, 2.0, 2.0, 1.0);
    second.time_stamp = Some("02/01/2024".to_string());
    let records = vec![
        // Input order deliberately differs from output order
        second,
        create_measured_record("PART-A", 1, 10.0, 5.0, 2.0, 3.0),
    ];

    let (text, _) = export_to_string(&records, create_test_settings());

    let expected = format!(
        "{}\r\n\
         PART-A,,,10,5,2,3,100,0.6024,in,lb,in,166,733,01/15/2024,,Y,Y,,,,,0,,N\r\n\
         part-b,,,2,2,2,1,8,0.0482,in,lb,in,166,733,02/01/2024,,Y,Y,,,,,0,,N\r\n",
        header_line()
    );
    assert_eq!(text, expected);
}

#[test]
fn test_one_row_per_part_with_representative_measurements() {
    let records = vec![
        create_measured_record("WIDGET", 5, 99.0, 99.0, 99.0, 99.0),
        create_measured_record("widget", 2, 10.0, 5.0, 2.0, 3.0),
    ];

    let (text, _) = export_to_string(&records, create_test_settings());
    let data_lines: Vec<&str> = text
        .split("\r\n")
        .skip(1)
        .filter(|line| !line.is_empty())
        .collect();

    assert_eq!(data_lines.len(), 1);
    // The sequence-2 record supplies the measurements
    assert!(data_lines[0].starts_with("WIDGET,,,10,5,2,3,"));
}

#[test]
fn test_blank_part_numbers_counted_as_skipped() {
    let records = vec![
        create_test_record("", 1),
        create_test_record("  ", 2),
        create_measured_record("WIDGET", 1, 1.0, 1.0, 1.0, 1.0),
    ];

    let exporter = Exporter::new(create_test_settings());
    let mut sink: Vec<u8> = Vec::new();
    let result = exporter.export(&records, &mut sink, None, |_| {}).unwrap();

    assert_eq!(result.stats.total_records, 3);
    assert_eq!(result.stats.skipped_records, 2);
    assert_eq!(result.stats.group_count, 1);
    assert_eq!(result.exported_count(), 1);
    assert_eq!(result.error_count(), 0);
}

#[test]
fn test_metric_units_with_default_factor_warns_once() {
    let settings = ExportSettings::default().with_units("cm", "kg", "cm");
    let (_, messages) = export_to_string(&[], settings);

    let warnings: Vec<_> = messages
        .iter()
        .filter(|m| matches!(m, ExportMessage::Warning(_)))
        .collect();
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_metric_units_with_custom_factor_does_not_warn() {
    let settings = ExportSettings::default()
        .with_units("cm", "kg", "cm")
        .with_factor(5000.0);
    let (_, messages) = export_to_string(&[], settings);

    assert!(
        messages
            .iter()
            .all(|m| !matches!(m, ExportMessage::Warning(_)))
    );
}

#[test]
fn test_imperial_units_with_default_factor_does_not_warn() {
    let (_, messages) = export_to_string(&[], create_test_settings());
    assert!(
        messages
            .iter()
            .all(|m| !matches!(m, ExportMessage::Warning(_)))
    );
}

#[test]
fn test_special_characters_in_settings_round_trip_through_csv() {
    let settings = ExportSettings::default()
        .with_site_id("site \"7\"")
        .with_opt_info("Y,N", "Y");
    let records = vec![create_measured_record("WIDGET", 1, 1.0, 1.0, 1.0, 1.0)];

    let (text, messages) = export_to_string(&records, settings);

    // No validation errors despite embedded delimiters and quotes
    assert!(
        messages
            .iter()
            .all(|m| !matches!(m, ExportMessage::RowError { .. }))
    );

    // Every emitted row still parses to exactly 25 fields
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let mut rows = 0;
    for record in reader.records() {
        let record = record.unwrap();
        assert_eq!(record.len(), FIELD_COUNT);
        rows += 1;
    }
    assert_eq!(rows, 1);
}

struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "sink closed",
        ))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_sink_failure_is_fatal() {
    let exporter = Exporter::new(create_test_settings());
    let result = exporter.export(&[], &mut FailingSink, None, |_| {});

    assert!(matches!(result, Err(Error::Io { .. })));
}
