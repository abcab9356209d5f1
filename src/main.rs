use clap::Parser;
use partfeed_exporter::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            // Success - the summary has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {error:#}");
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Part Feed Exporter - Dimensioning Capture to ERP Feed Converter");
    println!("===============================================================");
    println!();
    println!("Export part dimensioning capture records into the fixed-schema CSV");
    println!("feed consumed by downstream logistics/ERP systems.");
    println!();
    println!("USAGE:");
    println!("    partfeed-exporter <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    export      Export capture records to a CSV feed file (main command)");
    println!("    check       Check a produced feed file for structural problems");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Export the default capture store to ./item_export.csv:");
    println!("    partfeed-exporter export");
    println!();
    println!("    # Export a specific store with metric units:");
    println!("    partfeed-exporter export --input captures.csv --output feed.csv \\");
    println!("                             --dim-unit cm --wgt-unit kg --factor 5000");
    println!();
    println!("    # Check a produced feed file:");
    println!("    partfeed-exporter check feed.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    partfeed-exporter <COMMAND> --help");
}
