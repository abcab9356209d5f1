//! Export command implementation
//!
//! Loads the capture store, runs the export engine against a buffered file
//! sink (or a null sink for dry runs), and prints a run summary.

use super::setup_logging;
use crate::app::services::capture_store::{CaptureFileReader, ReadStats};
use crate::app::services::export_engine::{ExportMessage, ExportResult, Exporter};
use crate::cli::args::ExportArgs;
use crate::{Error, Result};
use colored::Colorize;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Export command runner
///
/// Workflow:
/// 1. Set up logging and validate arguments
/// 2. Load capture records from the store file
/// 3. Run the export engine with progress reporting
/// 4. Print the run summary
pub fn run_export(args: ExportArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting part feed export");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let input = args.get_input_path();
    let output = args.get_output_path();
    info!("Capture store: {}", input.display());
    info!("Feed output: {}", output.display());

    let (records, read_stats) = CaptureFileReader::new(&input).load()?;

    let settings = args.to_settings();
    settings.validate()?;
    let exporter = Exporter::new(settings);

    let progress = if args.show_progress() {
        Some(create_export_progress_bar(records.len() as u64))
    } else {
        None
    };

    let mut on_message = |message: &ExportMessage| match message {
        ExportMessage::Warning(text) => warn!("{text}"),
        ExportMessage::RowError { detail, .. } => error!("{detail}"),
        ExportMessage::Summary { .. } => {}
    };

    let result = if args.dry_run {
        info!("Dry run: feed file will not be written");
        let mut sink = std::io::sink();
        exporter.export(&records, &mut sink, progress.as_ref(), &mut on_message)?
    } else {
        let file = File::create(&output).map_err(|e| {
            Error::io(
                format!("failed to create feed file '{}'", output.display()),
                e,
            )
        })?;
        let mut writer = BufWriter::new(file);
        exporter.export(&records, &mut writer, progress.as_ref(), &mut on_message)?
    };

    if let Some(pb) = progress {
        pb.finish_with_message(format!("{} parts exported", result.exported_count()));
    }

    if !args.quiet {
        print_export_summary(&args, &result, &read_stats, start_time);
    }

    Ok(())
}

/// Create a progress bar for the export run
fn create_export_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message("Exporting parts");
    pb
}

/// Print the human-readable run summary
fn print_export_summary(
    args: &ExportArgs,
    result: &ExportResult,
    read_stats: &ReadStats,
    start_time: Instant,
) {
    let stats = &result.stats;

    println!();
    println!("{}", "Part Feed Export".bold());
    println!(
        "  Capture records: {} loaded, {} skipped",
        read_stats.records_loaded, read_stats.records_skipped
    );
    println!(
        "  Parts: {} ({} records with blank part numbers excluded)",
        stats.group_count, stats.skipped_records
    );

    if stats.errors > 0 {
        println!(
            "  Result: {} exported, {}",
            stats.exported.to_string().green(),
            format!("{} errors", stats.errors).red()
        );
        for message in &stats.error_messages {
            println!("    {} {message}", "error:".red());
        }
    } else {
        println!("  Result: {} exported", stats.exported.to_string().green());
    }

    if args.dry_run {
        println!("  {} no feed file written", "dry run:".yellow());
    } else {
        println!("  Feed file: {}", args.get_output_path().display());
    }

    println!("  Elapsed: {}", HumanDuration(start_time.elapsed()));
}
