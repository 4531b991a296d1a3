//! Command implementations for the Hanako fetcher CLI
//!
//! Dispatches the parsed arguments to a fetch entry point and reports the
//! resulting dataset in the requested format.

use tracing::debug;

use crate::app::models::Dataset;
use crate::cli::args::{Args, Commands, FileArgs, NetworkArgs, OutputFormat};
use crate::config::FetchConfig;
use crate::{Error, Result, fetch_from_file, fetch_from_network_with};

/// Main command runner for the fetcher
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::File(file_args) => run_file(file_args),
        Commands::Network(network_args) => run_network(network_args),
    }
}

fn run_file(args: FileArgs) -> Result<()> {
    args.validate()?;
    setup_logging(args.get_log_level());

    let dataset = fetch_from_file(&args.path)?;
    report(&dataset, &args.output_format)
}

fn run_network(args: NetworkArgs) -> Result<()> {
    args.validate()?;
    setup_logging(args.get_log_level());

    let config = match &args.endpoint {
        Some(endpoint) => FetchConfig::with_endpoint(endpoint),
        None => FetchConfig::default(),
    };

    let dataset = fetch_from_network_with(&config, &args.region)?;
    report(&dataset, &args.output_format)
}

/// Set up structured logging from the CLI verbosity flags
fn setup_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hanako_fetcher={level}")));

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

    debug!("Logging initialized at level: {}", level);
}

/// Print the parsed dataset in the requested format
fn report(dataset: &Dataset, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            let mut entries: Vec<_> = dataset.entries().collect();
            entries.sort_unstable_by(|a, b| a.name.cmp(&b.name));

            for entry in entries {
                let latest = entry
                    .observations
                    .last()
                    .map(|o| format!(", latest {} ({})", o.timestamp.format("%Y-%m-%d %H:%M"), o.count))
                    .unwrap_or_default();
                println!("{}: {} observations{}", entry.name, entry.observations.len(), latest);
            }

            println!(
                "{} stations, {} observations",
                dataset.station_count(),
                dataset.observation_count()
            );
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(dataset)
                .map_err(|e| Error::configuration(format!("failed to serialize dataset: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
