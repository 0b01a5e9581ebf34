// src/extract/mod.rs

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument, trace};

use crate::error::ScrapeError;
use crate::schema::{Record, COLUMNS};

pub mod clean;

pub use clean::clean_cell;

const TABLE_SELECTOR: &str = "table.wikitable";

static TABLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(TABLE_SELECTOR).expect("wikitable selector should parse"));
static ROW: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("row selector should parse"));
static CELL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("cell selector should parse"));

/// Turns the first `wikitable` of a page into [`Record`]s.
///
/// The first row is the header and is skipped. Only `td` cells count as data;
/// each is cleaned with [`clean_cell`] and dropped if nothing is left, and the
/// survivors are labeled positionally. Rows with no surviving cells produce
/// nothing.
///
/// Selectors are compiled once per process and shared by every extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowExtractor;

impl RowExtractor {
    pub const fn new() -> Self {
        Self
    }

    /// First matching table, or `TableNotFound`.
    pub fn find_table<'a>(&self, doc: &'a Html) -> Result<ElementRef<'a>, ScrapeError> {
        doc.select(&TABLE)
            .next()
            .ok_or_else(|| ScrapeError::TableNotFound {
                selector: TABLE_SELECTOR.to_string(),
            })
    }

    #[instrument(level = "debug", skip_all)]
    pub fn extract(&self, doc: &Html) -> Result<Vec<Record>, ScrapeError> {
        let table = self.find_table(doc)?;

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for (row_idx, row) in table.select(&ROW).enumerate().skip(1) {
            let fields = self.row_fields(row);
            if fields.is_empty() {
                trace!(row = row_idx, "empty row");
                skipped += 1;
                continue;
            }

            let n = fields.len();
            let record = Record::from_fields(fields).ok_or(ScrapeError::RowShape {
                row: row_idx,
                fields: n,
                max: COLUMNS.len(),
            })?;
            if n < COLUMNS.len() {
                debug!(row = row_idx, fields = n, "short row kept as-is");
            }
            records.push(record);
        }

        debug!(records = records.len(), skipped, "extracted table");
        Ok(records)
    }

    /// Cleaned, non-empty cell texts of one row, in order.
    fn row_fields(&self, row: ElementRef<'_>) -> Vec<String> {
        row.select(&CELL)
            .enumerate()
            .map(|(idx, cell)| clean_cell(&cell.text().collect::<String>(), idx))
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Parse `html` and extract its first wikitable.
pub fn extract_records(html: &str) -> Result<Vec<Record>, ScrapeError> {
    let doc = Html::parse_document(html);
    RowExtractor.extract(&doc)
}
