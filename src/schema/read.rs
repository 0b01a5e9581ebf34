use std::{fs::File, io::BufReader, path::Path};

use super::Record;
use crate::error::ScrapeError;

/// Load a JSON array previously written by [`write_records`](super::write_records).
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, ScrapeError> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| ScrapeError::io(path, e))?;
    Ok(serde_json::from_reader(BufReader::new(f))?)
}
