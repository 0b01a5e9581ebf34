pub mod read;
pub mod types;
pub mod write;

pub use read::load_records;
pub use types::{Record, COLUMNS};
pub use write::write_records;
