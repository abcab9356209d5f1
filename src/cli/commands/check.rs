//! Check command implementation
//!
//! Re-reads a produced feed file and verifies its structure: UTF-8 without a
//! byte-order mark, CRLF termination, the exact 25-column header, and the
//! field count of every data row.

use super::setup_logging;
use crate::app::services::export_engine::serializer::header_line;
use crate::app::services::export_engine::validator::field_count;
use crate::cli::args::CheckArgs;
use crate::constants::{FIELD_COUNT, LINE_TERMINATOR};
use crate::{Error, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Outcome of a feed file structure check
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedReport {
    /// Data rows inspected
    pub data_rows: usize,
    /// Structural problems found
    pub issues: Vec<String>,
}

impl FeedReport {
    /// Check whether the feed passed every structural check
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check command runner
pub fn run_check(args: CheckArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false)?;

    info!("Checking feed file {}", args.file.display());
    args.validate()?;

    let report = check_feed_file(&args.file)?;

    println!();
    println!("{}", "Feed Check".bold());
    println!("  File: {}", args.file.display());
    println!("  Data rows: {}", report.data_rows);

    if report.is_clean() {
        println!("  Result: {}", "clean".green());
        Ok(())
    } else {
        println!(
            "  Result: {}",
            format!("{} issues", report.issues.len()).red()
        );
        for issue in &report.issues {
            println!("    {} {issue}", "issue:".red());
        }
        Err(Error::feed_validation(
            args.file.display().to_string(),
            format!("{} structural issues found", report.issues.len()),
        ))
    }
}

/// Run all structural checks against a feed file
pub fn check_feed_file(path: &Path) -> Result<FeedReport> {
    let raw = fs::read(path)
        .map_err(|e| Error::io(format!("failed to read feed file '{}'", path.display()), e))?;

    let mut report = FeedReport::default();

    if raw.starts_with(&[0xEF, 0xBB, 0xBF]) {
        report
            .issues
            .push("file starts with a UTF-8 byte-order mark".to_string());
    }

    let text = String::from_utf8(raw).map_err(|_| {
        Error::feed_validation(path.display().to_string(), "feed is not valid UTF-8")
    })?;

    if text.is_empty() {
        report.issues.push("file is empty".to_string());
        return Ok(report);
    }

    if !text.ends_with(LINE_TERMINATOR) {
        report
            .issues
            .push("file does not end with a CRLF line terminator".to_string());
    }

    let mut lines = text.split(LINE_TERMINATOR);

    match lines.next() {
        Some(header) if header == header_line() => {}
        Some(header) => report
            .issues
            .push(format!("header mismatch: got '{header}'")),
        None => report.issues.push("missing header line".to_string()),
    }

    for (index, line) in lines.filter(|line| !line.is_empty()).enumerate() {
        report.data_rows += 1;
        let count = field_count(line);
        if count != FIELD_COUNT {
            // Header is line 1; data starts on line 2
            report.issues.push(format!(
                "line {}: {} fields, expected {}",
                index + 2,
                count,
                FIELD_COUNT
            ));
        }
    }

    debug!(
        "Feed check complete: {} rows, {} issues",
        report.data_rows,
        report.issues.len()
    );

    Ok(report)
}
