//! Naive comma-delimited text parsing.
//!
//! Lines are split on `\n` and fields on `,`. Quoting and escaping are not
//! supported: a field containing a comma or a newline is split apart. Roster
//! exports are assumed to be comma-free; see the `embedded_comma_*` tests.

use roster_model::{ParsedTable, Row};
use tracing::debug;

fn is_trim_char(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{feff}'
}

/// Trims surrounding whitespace and any byte-order mark from a field.
pub fn normalize_field(raw: &str) -> String {
    raw.trim_matches(is_trim_char).to_string()
}

/// Splits one line on commas and normalizes every field.
pub fn split_line(line: &str) -> Vec<String> {
    line.split(',').map(normalize_field).collect()
}

fn build_row(headers: &[String], line: &str) -> Row {
    let values = split_line(line);
    let mut row = Row::new();
    for (idx, header) in headers.iter().enumerate() {
        let value = values.get(idx).cloned().unwrap_or_default();
        row.insert(header.clone(), value);
    }
    row
}

/// Parses delimited text into headers and non-blank rows.
///
/// Returns `None` when the trimmed text has fewer than two lines. Values stay
/// strings; a row shorter than the header line is padded with empty strings
/// and extra trailing fields are ignored.
pub fn parse_csv_text(text: &str) -> Option<ParsedTable> {
    let lines: Vec<&str> = text.trim_matches(is_trim_char).split('\n').collect();
    if lines.len() < 2 {
        debug!(line_count = lines.len(), "not enough lines to parse");
        return None;
    }
    let headers = split_line(lines[0]);
    let mut rows = Vec::with_capacity(lines.len() - 1);
    let mut blank = 0usize;
    for line in &lines[1..] {
        let row = build_row(&headers, line);
        if row.values().all(String::is_empty) {
            blank += 1;
            continue;
        }
        rows.push(row);
    }
    debug!(
        column_count = headers.len(),
        row_count = rows.len(),
        blank_rows = blank,
        "parsed csv text"
    );
    Some(ParsedTable::new(headers, rows))
}
