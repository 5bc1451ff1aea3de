use clap::Parser;
use csse_importer::cli::{args::Args, commands};
use std::error::Error as _;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(_stats) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print the chain to stderr and exit non-zero
            eprintln!("Error: {error}");
            let mut source = error.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("CSSE Importer - COVID-19 Report Forwarder");
    println!("=========================================");
    println!();
    println!("Parse Johns Hopkins CSSE COVID-19 CSV exports and forward normalized");
    println!("metric lines to a Carbon/Graphite backend.");
    println!();
    println!("USAGE:");
    println!("    csse-importer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    daily         Import per-date daily report files over a date range");
    println!("    timeseries    Import the global time-series files (confirmed, deaths)");
    println!("    help          Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Import daily reports since the default start date:");
    println!("    csse-importer daily --data-dir /data/COVID-19");
    println!();
    println!("    # Import daily reports from March 2020 onward:");
    println!("    csse-importer daily --since 2020-03-01 --carbon graphite:2003");
    println!();
    println!("    # Import the global time series:");
    println!("    csse-importer timeseries --data-dir /data/COVID-19");
    println!();
    println!("For detailed help on any command, use:");
    println!("    csse-importer <COMMAND> --help");
}
