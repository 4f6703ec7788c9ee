//! Column lookup helpers.

use roster_ingest::int_or_zero;
use roster_model::{ParsedTable, Row};

/// Index of the header equal to `name`.
pub(crate) fn exact_column(table: &ParsedTable, name: &str) -> Option<usize> {
    table.find_header(|header| header == name)
}

/// Integer value of the column at `index`, or zero.
///
/// A missing column, a missing cell, and an unparsable cell all read as zero.
pub fn field_as_int_or_zero(table: &ParsedTable, row: &Row, index: Option<usize>) -> i64 {
    int_or_zero(table.value(row, index))
}
