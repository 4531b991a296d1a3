//! Construction of the data-export POST request.

use reqwest::blocking::Client;
use reqwest::header;
use tracing::debug;

use super::templates::captured_templates;
use crate::config::FetchConfig;
use crate::constants::{FORM_CONTENT_TYPE, UPGRADE_INSECURE_REQUESTS};
use crate::{Error, Result};

/// Builds the POST request that replays a captured form submission
///
/// The builder owns the immutable region-to-template table and the
/// browser-session header set. It never derives fresh postback tokens; an
/// unregistered region is a lookup failure before any I/O happens.
#[derive(Debug)]
pub struct RequestBuilder<'a> {
    config: &'a FetchConfig,
    templates: &'static [(&'static str, &'static str)],
}

impl<'a> RequestBuilder<'a> {
    /// Create a builder over the captured-template table
    pub fn new(config: &'a FetchConfig) -> Self {
        Self {
            config,
            templates: captured_templates(),
        }
    }

    /// Region names with a captured template
    pub fn regions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.templates.iter().map(|(region, _)| *region)
    }

    /// Look up the captured form body for a region
    pub fn form_body(&self, region: &str) -> Result<&'static str> {
        self.templates
            .iter()
            .find(|(name, _)| *name == region)
            .map(|(_, body)| *body)
            .ok_or_else(|| Error::unknown_region(region))
    }

    /// Build the export request for a region: captured body plus the fixed
    /// browser-session header set
    pub fn build(&self, client: &Client, region: &str) -> Result<reqwest::blocking::RequestBuilder> {
        let body = self.form_body(region)?;
        debug!(
            "building export request for region '{}' ({} byte form body)",
            region,
            body.len()
        );

        Ok(client
            .post(self.config.endpoint.as_str())
            .header(header::USER_AGENT, self.config.user_agent.as_str())
            .header(header::ACCEPT, self.config.accept.as_str())
            .header(header::ACCEPT_LANGUAGE, self.config.accept_language.as_str())
            .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header("Upgrade-Insecure-Requests", UPGRADE_INSECURE_REQUESTS)
            .header(header::REFERER, self.config.referer.as_str())
            .body(body))
    }
}
