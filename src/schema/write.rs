use serde::Serialize;
use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

use super::Record;
use crate::error::ScrapeError;

/// Write `records` to `path` as a JSON array, replacing whatever is there.
///
/// The array goes to a hidden temp file beside `path` first and is renamed
/// over it, so a failed run never leaves a truncated file behind.
pub fn write_records<P: AsRef<Path>>(path: P, records: &[Record]) -> Result<(), ScrapeError> {
    let path = path.as_ref();
    write_json_atomic(path, records)?;
    debug!(path = %path.display(), records = records.len(), "wrote records");
    Ok(())
}

/// Pretty JSON plus trailing newline, via `.<name>.tmp` and a rename.
/// The temp file is removed on any failure after it was created.
fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ScrapeError> {
    // 1) Make sure the parent exists
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(|e| ScrapeError::io(&dir, e))?;

    // 2) Serialize into ".<name>.tmp"
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "records.json".to_string());
    let tmp_path = dir.join(format!(".{}.tmp", file_name));

    let tmp = fs::File::create(&tmp_path).map_err(|e| ScrapeError::io(&tmp_path, e))?;

    // 3) Fill the temp file, then rename it over the target
    let result = (|| -> Result<(), ScrapeError> {
        let mut w = BufWriter::new(tmp);
        serde_json::to_writer_pretty(&mut w, value)?;
        w.write_all(b"\n")
            .and_then(|_| w.flush())
            .map_err(|e| ScrapeError::io(&tmp_path, e))?;
        drop(w);
        fs::rename(&tmp_path, path).map_err(|e| ScrapeError::io(path, e))
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}
