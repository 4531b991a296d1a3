//! Hanako Fetcher Library
//!
//! A Rust library for retrieving hourly pollen observation data from Japan's
//! Hanako monitoring network and indexing it by observation station.
//!
//! This library provides tools for:
//! - Replaying the captured ASP.NET form submission that the download
//!   endpoint requires before it will serve CSV data
//! - Decoding the Shift_JIS payload to UTF-8 without silent substitution
//! - Parsing the headerless 16-field observation rows with typed field
//!   conversion
//! - Grouping observations into a station-keyed dataset in a single pass
//! - Comprehensive error reporting with row and field context

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod record_parser;
        pub mod request_builder;
        pub mod source;
        pub mod stream_decoder;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Dataset, Entry, Observation};
pub use app::services::source::{fetch_from_file, fetch_from_network, fetch_from_network_with};
pub use config::FetchConfig;

/// Result type alias for the Hanako fetcher
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Hanako fetch and parse operations
///
/// Every error aborts the current fetch or parse call entirely; there is no
/// retryable classification and no partial dataset is ever returned.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Network or file I/O failed, or the endpoint answered with a
    /// non-success status
    #[error("transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Byte sequence invalid in the declared source encoding
    #[error("decode error: {message}")]
    Decode { message: String },

    /// Wrong field count, or a field that failed type conversion
    #[error("malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    /// Region name has no captured request template
    #[error("unknown region '{region}': no captured request template")]
    UnknownRegion { region: String },

    /// Configuration or argument validation error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a transport error with an underlying cause
    pub fn transport(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Transport {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a transport error with a simple message
    pub fn transport_message(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a malformed row error for a whole-row defect
    pub fn malformed_row(row: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            row,
            reason: reason.into(),
        }
    }

    /// Create a malformed row error for a single field, naming the 1-based
    /// column and the raw value
    pub fn malformed_field(
        row: usize,
        column: usize,
        value: &str,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedRow {
            row,
            reason: format!("column {} value '{}': {}", column, value, reason.into()),
        }
    }

    /// Create an unknown region error
    pub fn unknown_region(region: impl Into<String>) -> Self {
        Self::UnknownRegion {
            region: region.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Transport {
            message: "I/O operation failed".to_string(),
            source: Some(Box::new(error)),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport {
            message: "HTTP request failed".to_string(),
            source: Some(Box::new(error)),
        }
    }
}
