//! Export orchestration
//!
//! Composes grouping, row assembly, serialization, and validation into the
//! end-to-end "records + settings -> CSV text" transform. The engine is
//! synchronous and holds no state across invocations; independent runs may
//! execute concurrently as long as each gets its own sink and settings.

use super::grouping::group_records;
use super::row::assemble_row;
use super::serializer::{header_line, serialize_row};
use super::stats::{ExportResult, ExportStats};
use super::validator::validate_row;
use crate::app::models::CaptureRecord;
use crate::config::ExportSettings;
use crate::constants::{DEFAULT_DIM_FACTOR, LINE_TERMINATOR};
use crate::{Error, Result};
use indicatif::ProgressBar;
use std::io::Write;
use tracing::{info, warn};

/// Diagnostic message emitted by the export engine
///
/// The engine reports through this injected observer rather than binding the
/// transform to a concrete logging framework; the CLI forwards messages to
/// `tracing`.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportMessage {
    /// Pre-run configuration warning
    Warning(String),
    /// A row was dropped by structural validation
    RowError { part: String, detail: String },
    /// Final per-run counters
    Summary { exported: usize, errors: usize },
}

impl std::fmt::Display for ExportMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning(text) => write!(f, "warning: {text}"),
            Self::RowError { detail, .. } => write!(f, "{detail}"),
            Self::Summary { exported, errors } => {
                write!(f, "export complete: {exported} exported, {errors} errors")
            }
        }
    }
}

/// Export engine for part capture records
///
/// Settings are injected at construction and immutable for the engine's
/// lifetime; there is no shared default-settings state.
#[derive(Debug, Clone)]
pub struct Exporter {
    settings: ExportSettings,
}

impl Exporter {
    /// Create an exporter with the settings for this run
    pub fn new(settings: ExportSettings) -> Self {
        Self { settings }
    }

    /// Get the settings used by this exporter
    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Run the full export transform against a sink
    ///
    /// Emits the header line, then one validated row per distinct part in
    /// deterministic order. Rows failing structural validation are dropped,
    /// counted, and reported through `on_message`; the run continues. Sink
    /// I/O failures are fatal and propagate; nothing beyond what was already
    /// flushed is guaranteed to be on disk.
    pub fn export<W, F>(
        &self,
        records: &[CaptureRecord],
        sink: &mut W,
        progress: Option<&ProgressBar>,
        mut on_message: F,
    ) -> Result<ExportResult>
    where
        W: Write,
        F: FnMut(&ExportMessage),
    {
        let mut stats = ExportStats::new();
        stats.total_records = records.len();

        info!(
            "Starting feed export for {} capture records",
            records.len()
        );

        if self.settings.uses_metric_units() && self.settings.has_default_factor() {
            let warning = ExportMessage::Warning(format!(
                "metric units configured but the dimensional-weight factor is still the \
                 inch/pound default {DEFAULT_DIM_FACTOR}; NET_DIM_WGT values will be skewed"
            ));
            warn!("{warning}");
            on_message(&warning);
        }

        write_line(sink, &header_line(), "failed to write feed header")?;

        let groups = group_records(records);
        stats.group_count = groups.len();
        stats.skipped_records =
            records.len() - groups.iter().map(|group| group.members.len()).sum::<usize>();

        if let Some(pb) = progress {
            pb.set_length(groups.len() as u64);
        }

        for group in &groups {
            let row = assemble_row(&group.key, Some(group.representative()), &self.settings);
            let line = serialize_row(row.values());

            if let Err(error) = validate_row(&group.key, &line) {
                warn!("dropping malformed feed row: {error}");
                stats.add_error(error.to_string());
                on_message(&ExportMessage::RowError {
                    part: group.key.clone(),
                    detail: error.to_string(),
                });
                continue;
            }

            write_line(sink, &line, "failed to write feed row")?;
            stats.exported += 1;

            if let Some(pb) = progress {
                pb.inc(1);
            }
        }

        sink.flush()
            .map_err(|error| Error::io("failed to flush export sink", error))?;

        info!("{}", stats.summary());
        on_message(&ExportMessage::Summary {
            exported: stats.exported,
            errors: stats.errors,
        });

        Ok(ExportResult::new(stats))
    }
}

fn write_line<W: Write>(sink: &mut W, line: &str, context: &str) -> Result<()> {
    sink.write_all(line.as_bytes())
        .and_then(|_| sink.write_all(LINE_TERMINATOR.as_bytes()))
        .map_err(|error| Error::io(context, error))
}
