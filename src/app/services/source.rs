//! Fetch entry points: local file or live endpoint.
//!
//! Both sources converge on the same pipeline: byte stream, Shift_JIS
//! decode, row parse. Each call is an independent synchronous chain that
//! produces its own dataset; nothing is shared across calls.

use reqwest::blocking::Client;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

use crate::app::models::Dataset;
use crate::app::services::record_parser::parse_records;
use crate::app::services::request_builder::RequestBuilder;
use crate::app::services::stream_decoder::decode_stream;
use crate::config::FetchConfig;
use crate::{Error, Result};

/// Parse a previously downloaded export file
///
/// The file holds the CSV exactly as the endpoint serves it, Shift_JIS
/// encoded. The handle is released when parsing completes or fails.
pub fn fetch_from_file<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    info!("fetching observations from file {}", path.display());

    let file = File::open(path)
        .map_err(|e| Error::transport(format!("failed to open {}", path.display()), e))?;

    let text = decode_stream(BufReader::new(file))?;
    parse_records(&text)
}

/// Fetch observations for a region from the live endpoint
pub fn fetch_from_network(region: &str) -> Result<Dataset> {
    fetch_from_network_with(&FetchConfig::default(), region)
}

/// Fetch observations for a region using an explicit configuration
///
/// One synchronous POST, no retries, transport-default timeouts and
/// redirect handling. The region lookup happens before any I/O, so an
/// unregistered region never touches the network. A non-success response
/// status is reported as a transport error rather than handing the
/// server's HTML error page to the decoder.
pub fn fetch_from_network_with(config: &FetchConfig, region: &str) -> Result<Dataset> {
    config.validate()?;

    let builder = RequestBuilder::new(config);
    // fails on an unregistered region before the client ever sends
    let request = builder.build(&Client::new(), region)?;

    info!("fetching observations for region '{region}' from {}", config.endpoint);
    let response = request
        .send()
        .map_err(|e| Error::transport(format!("request to {} failed", config.endpoint), e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::transport_message(format!(
            "download endpoint returned {status}"
        )));
    }

    let text = decode_stream(response)?;
    parse_records(&text)
}
