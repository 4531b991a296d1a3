use clap::Parser;
use hanako_fetcher::cli::{args::Args, commands};
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
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {error}");
            let mut source = std::error::Error::source(&error);
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
    println!("Hanako Fetcher - Japanese Pollen Observation Downloader");
    println!("=======================================================");
    println!();
    println!("Fetch hourly pollen observation records from Japan's Hanako monitoring");
    println!("network and report them grouped by observation station.");
    println!();
    println!("USAGE:");
    println!("    hanako-fetcher <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    file        Parse a previously downloaded export file");
    println!("    network     Fetch a region's observations from the live endpoint");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse a saved export:");
    println!("    hanako-fetcher file Data.csv");
    println!();
    println!("    # Fetch the Kanto region from the live endpoint as JSON:");
    println!("    hanako-fetcher network Kanto --output-format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    hanako-fetcher <COMMAND> --help");
}
