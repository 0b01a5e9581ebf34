pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod schema;

pub use config::Config;
pub use error::ScrapeError;
pub use extract::{extract_records, RowExtractor};
pub use schema::{load_records, write_records, Record, COLUMNS};
