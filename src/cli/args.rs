//! Command-line argument definitions for the Hanako fetcher
//!
//! Defines the CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Hanako pollen observation fetcher
///
/// Retrieves hourly pollen observation data from Japan's Hanako monitoring
/// network and indexes it by observation station.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hanako-fetcher",
    version,
    about = "Fetch and index hourly pollen observations from Japan's Hanako monitoring network",
    long_about = "Retrieves hourly pollen observation records from the Hanako monitoring \
                  network's download endpoint (or a previously downloaded file), decodes \
                  the Shift_JIS payload, and reports the observations grouped by station."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the fetcher
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a previously downloaded export file
    File(FileArgs),
    /// Fetch a region's observations from the live endpoint
    Network(NetworkArgs),
}

/// Arguments for the file command
#[derive(Debug, Clone, Parser)]
pub struct FileArgs {
    /// Path to a Data.csv export saved from the download page, still in
    /// its original Shift_JIS encoding
    #[arg(value_name = "PATH", help = "Path to a saved Shift_JIS export file")]
    pub path: PathBuf,

    /// Output format for the parsed dataset
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the network command
#[derive(Debug, Clone, Parser)]
pub struct NetworkArgs {
    /// Region whose captured export request should be replayed
    #[arg(value_name = "REGION", help = "Region name, e.g. Kanto")]
    pub region: String,

    /// Override the download endpoint URL
    ///
    /// Useful for mirrors or local test servers; the captured session
    /// headers and form body are sent unchanged.
    #[arg(long = "endpoint", value_name = "URL", help = "Override the download endpoint URL")]
    pub endpoint: Option<String>,

    /// Output format for the parsed dataset
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable per-station summary
    Human,
    /// JSON dump of the full dataset
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl FileArgs {
    /// Validate the file command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.path.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.path.display()
            )));
        }

        if !self.path.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.path.display()
            )));
        }

        Ok(())
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
}

impl NetworkArgs {
    /// Validate the network command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.region.trim().is_empty() {
            return Err(Error::configuration("Region name must not be empty"));
        }

        if let Some(endpoint) = &self.endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(Error::configuration(format!(
                    "Endpoint must be an http(s) URL: {endpoint}"
                )));
            }
        }

        Ok(())
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_args_validation() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"x").unwrap();

        let args = FileArgs {
            path: file.path().to_path_buf(),
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_ok());

        let missing = FileArgs {
            path: PathBuf::from("/nonexistent/Data.csv"),
            ..args
        };
        assert!(missing.validate().is_err());
    }

    #[test]
    fn test_network_args_validation() {
        let args = NetworkArgs {
            region: "Kanto".to_string(),
            endpoint: None,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_ok());

        let blank_region = NetworkArgs {
            region: "  ".to_string(),
            ..args.clone()
        };
        assert!(blank_region.validate().is_err());

        let bad_endpoint = NetworkArgs {
            endpoint: Some("gopher://kafun".to_string()),
            ..args
        };
        assert!(bad_endpoint.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = NetworkArgs {
            region: "Kanto".to_string(),
            endpoint: None,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        };

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }
}
