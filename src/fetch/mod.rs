// src/fetch/mod.rs

use reqwest::blocking::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::config::Config;
use crate::error::ScrapeError;

/// Blocking client carrying the configured user agent.
pub fn build_client(config: &Config) -> Result<Client, ScrapeError> {
    Ok(Client::builder().user_agent(&config.user_agent).build()?)
}

/// GET `url` once and return the body as text. Non-2xx is an error.
#[instrument(level = "info", skip(client, url), fields(url = %url))]
pub fn fetch_html(client: &Client, url: &Url) -> Result<String, ScrapeError> {
    let resp = client.get(url.clone()).send()?.error_for_status()?;
    debug!(status = %resp.status(), "response");
    let body = resp.text()?;
    debug!(bytes = body.len(), "read body");
    Ok(body)
}
