use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single data row keyed by header name.
///
/// Duplicate header names collapse into one key; the right-most column wins.
pub type Row = BTreeMap<String, String>;

/// Result of parsing delimited text: the header line plus its data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTable {
    /// Header names in the order they appear on the first line.
    pub headers: Vec<String>,
    /// Non-blank data rows in input order.
    pub rows: Vec<Row>,
}

impl ParsedTable {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first header matching `predicate`.
    pub fn find_header(&self, predicate: impl Fn(&str) -> bool) -> Option<usize> {
        self.headers.iter().position(|header| predicate(header))
    }

    /// Value stored in `row` under the header at `index`.
    ///
    /// Returns `None` when the index is absent or out of range.
    pub fn value<'a>(&self, row: &'a Row, index: Option<usize>) -> Option<&'a str> {
        let header = self.headers.get(index?)?;
        row.get(header).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ParsedTable {
        let row: Row = [("a", "1"), ("b", "2")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ParsedTable::new(vec!["a".to_string(), "b".to_string()], vec![row])
    }

    #[test]
    fn find_header_returns_first_match() {
        let table = table();
        assert_eq!(table.find_header(|h| h == "b"), Some(1));
        assert_eq!(table.find_header(|h| h == "c"), None);
    }

    #[test]
    fn value_handles_missing_index() {
        let table = table();
        let row = &table.rows[0];
        assert_eq!(table.value(row, Some(0)), Some("1"));
        assert_eq!(table.value(row, None), None);
        assert_eq!(table.value(row, Some(9)), None);
    }
}
