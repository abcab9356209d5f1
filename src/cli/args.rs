//! Command-line argument definitions for the part feed exporter
//!
//! This module defines the complete CLI interface using the clap derive API.
//! Unit flags accept free text deliberately: the conversion layer treats
//! unrecognized tokens as inches/pounds, and the CLI preserves that
//! behavior instead of rejecting unknown units.

use crate::config::ExportSettings;
use crate::constants::{
    DEFAULT_DIM_FACTOR, DEFAULT_EXPORT_FILE_NAME, DEFAULT_OPT_INFO, DEFAULT_SITE_ID,
    DEFAULT_STORE_DIR, DEFAULT_STORE_FILE_NAME, units,
};
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the part feed exporter
///
/// Exports part dimensioning capture records into a fixed-schema CSV feed
/// for logistics/ERP ingestion.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "partfeed-exporter",
    version,
    about = "Export part dimensioning capture records to a fixed-schema CSV feed",
    long_about = "Exports capture records written by a dimensioning station into the 25-column \
                  CSV feed consumed by downstream logistics/ERP systems. Groups per-image \
                  records into one row per part, converts units, computes volume and \
                  dimensional weight, and validates every row before it is written."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the part feed exporter
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Export capture records to a CSV feed file (main command)
    Export(ExportArgs),
    /// Check a produced feed file for structural problems
    Check(CheckArgs),
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Input path to the capture store CSV file
    ///
    /// If not specified, defaults to the capture station's record file under
    /// the platform data directory.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input path to the capture store CSV file"
    )]
    pub input: Option<PathBuf>,

    /// Output path for the generated feed file
    ///
    /// Defaults to ./item_export.csv. The parent directory must exist; the
    /// file itself is created or overwritten.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path for the generated feed file"
    )]
    pub output: Option<PathBuf>,

    /// Dimension unit for NET_LENGTH/NET_WIDTH/NET_HEIGHT (in or cm)
    #[arg(
        long = "dim-unit",
        value_name = "UNIT",
        default_value = units::INCHES,
        help = "Dimension unit for exported measurements (in or cm)"
    )]
    pub dim_unit: String,

    /// Weight unit for NET_WEIGHT (lb or kg)
    #[arg(
        long = "wgt-unit",
        value_name = "UNIT",
        default_value = units::POUNDS,
        help = "Weight unit for exported measurements (lb or kg)"
    )]
    pub wgt_unit: String,

    /// Unit reported in the VOL_UNIT column
    #[arg(
        long = "vol-unit",
        value_name = "UNIT",
        default_value = units::INCHES,
        help = "Unit reported in the VOL_UNIT column"
    )]
    pub vol_unit: String,

    /// Dimensional-weight divisor
    ///
    /// The default 166 is calibrated for inch/pound feeds; metric feeds
    /// normally use a carrier-specific metric factor.
    #[arg(
        long = "factor",
        value_name = "DIVISOR",
        default_value_t = DEFAULT_DIM_FACTOR,
        help = "Dimensional-weight divisor"
    )]
    pub factor: f64,

    /// SITE_ID column value
    #[arg(
        long = "site-id",
        value_name = "ID",
        default_value = DEFAULT_SITE_ID,
        help = "SITE_ID column value"
    )]
    pub site_id: String,

    /// OPT_INFO_2 column value
    #[arg(
        long = "opt-info2",
        value_name = "VALUE",
        default_value = DEFAULT_OPT_INFO,
        help = "OPT_INFO_2 column value"
    )]
    pub opt_info2: String,

    /// OPT_INFO_3 column value
    #[arg(
        long = "opt-info3",
        value_name = "VALUE",
        default_value = DEFAULT_OPT_INFO,
        help = "OPT_INFO_3 column value"
    )]
    pub opt_info3: String,

    /// Run the full transform without writing the feed file
    #[arg(
        long = "dry-run",
        help = "Run the transform and report counters without writing the feed file"
    )]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Feed file to check
    #[arg(value_name = "FILE", help = "Feed file to check")]
    pub file: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ExportArgs {
    /// Validate the export command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        let input = self.get_input_path();
        if !input.exists() {
            return Err(Error::configuration(format!(
                "capture store file does not exist: {}",
                input.display()
            )));
        }
        if !input.is_file() {
            return Err(Error::configuration(format!(
                "capture store path is not a file: {}",
                input.display()
            )));
        }

        if let Some(parent) = self.get_output_path().parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::configuration(format!(
                    "output directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        if !self.factor.is_finite() {
            return Err(Error::configuration(format!(
                "dimensional-weight factor must be finite, got {}",
                self.factor
            )));
        }

        Ok(())
    }

    /// Resolve the capture store path, falling back to the station default
    pub fn get_input_path(&self) -> PathBuf {
        match &self.input {
            Some(path) => path.clone(),
            None => default_store_path(),
        }
    }

    /// Resolve the feed output path
    pub fn get_output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from(DEFAULT_EXPORT_FILE_NAME),
        }
    }

    /// Build the engine settings from the parsed flags
    pub fn to_settings(&self) -> ExportSettings {
        ExportSettings::default()
            .with_units(
                self.dim_unit.clone(),
                self.wgt_unit.clone(),
                self.vol_unit.clone(),
            )
            .with_factor(self.factor)
            .with_site_id(self.site_id.clone())
            .with_opt_info(self.opt_info2.clone(), self.opt_info3.clone())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show a progress bar (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl CheckArgs {
    /// Validate the check command arguments
    pub fn validate(&self) -> Result<()> {
        if !self.file.exists() {
            return Err(Error::configuration(format!(
                "feed file does not exist: {}",
                self.file.display()
            )));
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Default capture store location under the platform data directory
fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_STORE_DIR)
        .join(DEFAULT_STORE_FILE_NAME)
}
