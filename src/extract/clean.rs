/// Position of the Country cell within a row.
pub const COUNTRY_INDEX: usize = 1;

/// Drop thousands separators: `"1,234"` → `"1234"`.
pub fn strip_separators(s: &str) -> String {
    s.replace(',', "")
}

/// Cut a trailing parenthetical note off a name: `"Brazil (2020)"` → `"Brazil"`.
/// Everything from the first `(` on goes, then trailing whitespace.
pub fn strip_annotation(s: &str) -> &str {
    match s.find('(') {
        Some(idx) => s[..idx].trim_end(),
        None => s,
    }
}

/// Clean the visible text of the cell at `index` in its row.
///
/// Trim, remove commas, and for the Country cell also drop any annotation.
/// May return an empty string; callers decide whether to keep it.
pub fn clean_cell(raw: &str, index: usize) -> String {
    let s = strip_separators(raw.trim());
    if index == COUNTRY_INDEX {
        strip_annotation(&s).to_string()
    } else {
        s
    }
}
