//! Error taxonomy for a scrape run.
//!
//! Every variant is fatal: the pipeline stops at the first one and nothing
//! is written.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Request, transport, or non-success status.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The document has no table matching `selector`.
    #[error("no element matches `{selector}`; the page layout may have changed")]
    TableNotFound { selector: String },

    /// A data row has more non-empty cells than there are columns.
    #[error("row {row} has {fields} non-empty cells, expected at most {max}")]
    RowShape { row: usize, fields: usize, max: usize },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
