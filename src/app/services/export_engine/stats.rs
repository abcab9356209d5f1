//! Export statistics and result structures
//!
//! Tracks per-run counters for the export pipeline and carries the final
//! exported/error counts back to the caller.

/// Statistics for one export invocation
#[derive(Debug, Clone, PartialEq)]
pub struct ExportStats {
    /// Total number of input capture records
    pub total_records: usize,
    /// Records excluded for having a blank part number
    pub skipped_records: usize,
    /// Number of distinct parts after grouping
    pub group_count: usize,
    /// Rows written to the sink
    pub exported: usize,
    /// Rows dropped by structural validation
    pub errors: usize,
    /// Specific error messages for diagnostics
    pub error_messages: Vec<String>,
}

impl ExportStats {
    /// Create new empty export statistics
    pub fn new() -> Self {
        Self {
            total_records: 0,
            skipped_records: 0,
            group_count: 0,
            exported: 0,
            errors: 0,
            error_messages: Vec::new(),
        }
    }

    /// Add an error to the statistics
    pub fn add_error(&mut self, message: String) {
        self.errors += 1;
        self.error_messages.push(message);
    }

    /// Share of grouped parts that made it into the feed, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.group_count == 0 {
            100.0
        } else {
            (self.exported as f64 / self.group_count as f64) * 100.0
        }
    }

    /// Get a one-line summary of the export run
    pub fn summary(&self) -> String {
        format!(
            "Export Summary: {} records -> {} parts, {} exported, {} errors ({:.1}% success)",
            self.total_records,
            self.group_count,
            self.exported,
            self.errors,
            self.success_rate()
        )
    }
}

impl Default for ExportStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of one export invocation
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Export statistics and error information
    pub stats: ExportStats,
}

impl ExportResult {
    /// Create a new export result
    pub fn new(stats: ExportStats) -> Self {
        Self { stats }
    }

    /// Number of rows written to the sink
    pub fn exported_count(&self) -> usize {
        self.stats.exported
    }

    /// Number of rows dropped by validation
    pub fn error_count(&self) -> usize {
        self.stats.errors
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}
