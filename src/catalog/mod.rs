// src/catalog/mod.rs

use std::collections::BTreeMap;

use crate::schema::Record;

pub mod region;

pub use region::CoffeeRegion;

/// Table names that differ from the world-map dataset's `ADMIN` names.
static COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("Tanzania", "United Republic of Tanzania"),
    ("Timor Leste", "East Timor"),
];

/// Map-side name for a country as it appears in the table.
pub fn canonical_country(name: &str) -> &str {
    COUNTRY_ALIASES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
        .unwrap_or(name)
}

/// Records keyed by canonical country name. A later record for the same
/// country replaces an earlier one; records without a country are ignored.
#[derive(Debug, Default, Clone)]
pub struct CountryIndex {
    by_country: BTreeMap<String, Record>,
}

impl CountryIndex {
    pub fn new<I: IntoIterator<Item = Record>>(records: I) -> Self {
        let by_country = records
            .into_iter()
            .filter_map(|r| {
                let key = canonical_country(r.country.as_deref()?).to_string();
                Some((key, r))
            })
            .collect();
        Self { by_country }
    }

    /// Look up by map name (e.g. `"United Republic of Tanzania"`).
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.by_country.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_country.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_country.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_country.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.by_country.iter().map(|(k, v)| (k.as_str(), v))
    }
}
