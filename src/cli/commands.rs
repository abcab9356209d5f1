//! Command implementations for the part feed exporter CLI
//!
//! Each command is implemented in its own module; this module hosts the
//! dispatcher and the shared logging setup.

pub mod check;
pub mod export;

use crate::Result;
use crate::cli::args::{Args, Commands};
use tracing::debug;

/// Main command runner for the part feed exporter
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `export`: load capture records and produce the feed file
/// - `check`: structural verification of a produced feed file
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Export(export_args) => export::run_export(export_args),
        Commands::Check(check_args) => check::run_check(check_args),
    }
}

/// Set up structured logging for a CLI command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("partfeed_exporter={log_level}")));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {log_level}");
    Ok(())
}
