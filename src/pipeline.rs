// src/pipeline.rs

use std::time::Instant;

use tracing::{info, instrument};

use crate::config::Config;
use crate::error::ScrapeError;
use crate::extract::extract_records;
use crate::fetch::{build_client, fetch_html};
use crate::schema::{write_records, Record};

/// Fetch the page, extract the table, write the JSON. Returns what was written.
///
/// Stops at the first error; the output file is only touched once
/// extraction has succeeded.
#[instrument(
    level = "info",
    skip(config),
    fields(url = %config.source_url, out = %config.output_path.display())
)]
pub fn run(config: &Config) -> Result<Vec<Record>, ScrapeError> {
    let start = Instant::now();

    // ─── 1) fetch ────────────────────────────────────────────────────
    let client = build_client(config)?;
    let html = fetch_html(&client, &config.source_url)?;
    info!(bytes = html.len(), "fetched page");

    // ─── 2) parse + extract ──────────────────────────────────────────
    let records = extract_records(&html)?;
    info!(records = records.len(), "extracted rows");

    // ─── 3) write ────────────────────────────────────────────────────
    write_records(&config.output_path, &records)?;
    info!(elapsed = ?start.elapsed(), "wrote {}", config.output_path.display());

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use tempfile::tempdir;

    const PAGE: &str = r#"<html><body><table class="wikitable">
        <tr><th>Rank</th><th>Country</th><th>Bags</th><th>Metric tons</th><th>Pounds</th></tr>
        <tr><td>1</td><td>Brazil (2020)</td><td>62,925</td><td>3,775,500</td><td>8,323,582</td></tr>
        <tr><td>2</td><td>Vietnam</td><td>30,540</td><td>1,832,400</td><td>4,039,700</td></tr>
        </table></body></html>"#;

    fn serve_once(body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let resp = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(resp.as_bytes());
        });
        format!("http://{addr}/page")
    }

    #[test]
    fn end_to_end_writes_json() {
        let url = serve_once(PAGE);
        let tmp = tempdir().unwrap();
        let out = tmp.path().join("coffee.json");
        let config = Config::new(&url, &out).unwrap();

        let records = run(&config).unwrap();
        assert_eq!(records.len(), 2);

        let written = crate::schema::load_records(&out).unwrap();
        assert_eq!(written, records);
        assert_eq!(written[0].country.as_deref(), Some("Brazil"));
    }

    #[test]
    fn missing_table_leaves_existing_output_alone() {
        let url = serve_once("<html><body><p>nothing here</p></body></html>");
        let tmp = tempdir().unwrap();
        let out = tmp.path().join("coffee.json");
        std::fs::write(&out, "previous").unwrap();
        let config = Config::new(&url, &out).unwrap();

        let err = run(&config).unwrap_err();
        assert!(matches!(err, ScrapeError::TableNotFound { .. }));
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "previous");
    }

    #[test]
    fn unreachable_host_is_network_error() {
        // bind then drop so the port is (very likely) closed
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let tmp = tempdir().unwrap();
        let url = format!("http://127.0.0.1:{port}/");
        let config = Config::new(&url, tmp.path().join("x.json")).unwrap();

        let err = run(&config).unwrap_err();
        assert!(matches!(err, ScrapeError::Network(_)));
        assert!(!tmp.path().join("x.json").exists());
    }

    #[test]
    fn unwritable_output_is_io_error() {
        let url = serve_once(PAGE);
        let tmp = tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "regular file, not a directory").unwrap();
        let config = Config::new(&url, blocker.join("coffee.json")).unwrap();

        let err = run(&config).unwrap_err();
        assert!(matches!(err, ScrapeError::Io { .. }), "got {err:?}");
        assert_eq!(
            std::fs::read_to_string(&blocker).unwrap(),
            "regular file, not a directory"
        );
    }
}
