// src/config.rs

use std::path::PathBuf;
use url::Url;

use crate::error::ScrapeError;

pub const DEFAULT_SOURCE_URL: &str =
    "https://en.wikipedia.org/wiki/List_of_countries_by_coffee_production";

pub const DEFAULT_OUTPUT_PATH: &str = "coffee-distributor.json";

/// Wikipedia answers 403 to clients that don't identify themselves.
pub const DEFAULT_USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (coffee production table export)"
);

/// Where to read the table from and where to put the JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source_url: Url,
    pub output_path: PathBuf,
    pub user_agent: String,
}

impl Config {
    /// Build a config for `source_url` → `output_path` with the default user agent.
    pub fn new(source_url: &str, output_path: impl Into<PathBuf>) -> Result<Self, ScrapeError> {
        Ok(Self {
            source_url: Url::parse(source_url)?,
            output_path: output_path.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: Url::parse(DEFAULT_SOURCE_URL).expect("default source URL should parse"),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
