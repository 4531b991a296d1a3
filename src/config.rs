//! Configuration for the network fetch path.
//!
//! Holds the endpoint URL and the browser-session header values replayed
//! with each request. Defaults mirror the captured session; tests and
//! mirror deployments can point the endpoint elsewhere.

use crate::constants::{ACCEPT, ACCEPT_LANGUAGE, DOWNLOAD_ENDPOINT, REFERER, USER_AGENT};
use crate::{Error, Result};

/// Settings for one network fetch
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// URL of the data-export endpoint
    pub endpoint: String,

    /// Referer header value; the origin site checks that the submission
    /// came from its own download page
    pub referer: String,

    /// User agent of the replayed browser session
    pub user_agent: String,

    /// Accept header of the replayed browser session
    pub accept: String,

    /// Accept-Language header of the replayed browser session
    pub accept_language: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DOWNLOAD_ENDPOINT.to_string(),
            referer: REFERER.to_string(),
            user_agent: USER_AGENT.to_string(),
            accept: ACCEPT.to_string(),
            accept_language: ACCEPT_LANGUAGE.to_string(),
        }
    }
}

impl FetchConfig {
    /// Create a configuration that targets a non-default endpoint,
    /// keeping the captured session headers
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(Error::configuration("endpoint must not be empty"));
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(Error::configuration(format!(
                "endpoint must be an http(s) URL: {}",
                self.endpoint
            )));
        }

        Ok(())
    }
}
