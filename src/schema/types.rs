// src/schema/types.rs

use serde::{Deserialize, Serialize};

/// Output column labels, in table order.
pub const COLUMNS: [&str; 5] = ["Rank", "Country", "Bags", "MetricTons", "Pounds"];

/// One country's row from the production table.
///
/// Fields are filled positionally from the row's non-empty cells, so a row
/// that came up short leaves its trailing fields as `None` (serialized as
/// `null`). Values stay as text; nothing here parses the numbers.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct Record {
    #[serde(rename = "Rank")]
    pub rank: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Bags")]
    pub bags: Option<String>,
    #[serde(rename = "MetricTons")]
    pub metric_tons: Option<String>,
    #[serde(rename = "Pounds")]
    pub pounds: Option<String>,
}

impl Record {
    /// Label `fields` with [`COLUMNS`] in order.
    ///
    /// Returns `None` if there are more fields than columns.
    pub fn from_fields(fields: Vec<String>) -> Option<Self> {
        if fields.len() > COLUMNS.len() {
            return None;
        }
        let mut it = fields.into_iter();
        Some(Self {
            rank: it.next(),
            country: it.next(),
            bags: it.next(),
            metric_tons: it.next(),
            pounds: it.next(),
        })
    }

    /// Values in column order.
    pub fn fields(&self) -> [Option<&str>; 5] {
        [
            self.rank.as_deref(),
            self.country.as_deref(),
            self.bags.as_deref(),
            self.metric_tons.as_deref(),
            self.pounds.as_deref(),
        ]
    }

    /// Number of fields that carry a value.
    pub fn len(&self) -> usize {
        self.fields().iter().filter(|f| f.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
