//! Export engine for part dimensioning feeds
//!
//! This module implements the complete transform from in-memory capture
//! records plus resolved settings to the fixed-schema CSV feed consumed by
//! the downstream logistics/ERP import.
//!
//! # Architecture
//!
//! - [`engine`] - Orchestration: header, per-group pipeline, diagnostics
//! - [`grouping`] - One group per part, deterministic order, representative
//!   selection
//! - [`row`] - 25-field row assembly with conversion and derived metrics
//! - [`units`] - Length/weight unit conversion pivoting through inch/pound
//! - [`numeric`] - Canonical measurement formatting, blank on invalid
//! - [`serializer`] - RFC4180-style escaping and line rendering
//! - [`validator`] - Fixed column-count enforcement before emission
//! - [`stats`] - Per-run counters and result structures
//!
//! # Pipeline
//!
//! ```text
//! records + settings -> grouping -> row assembly -> serialization
//!                                      |                 |
//!                                  conversion,       validation -> sink
//!                                  formatting
//! ```
//!
//! A row is never partially written: all 25 fields are assembled and the
//! serialized text validated before any byte reaches the sink. A failing row
//! is dropped and counted; the run continues with the next part.

pub mod engine;
pub mod grouping;
pub mod numeric;
pub mod row;
pub mod serializer;
pub mod stats;
pub mod units;
pub mod validator;

#[cfg(test)]
mod tests;

pub use engine::{ExportMessage, Exporter};
pub use stats::{ExportResult, ExportStats};
