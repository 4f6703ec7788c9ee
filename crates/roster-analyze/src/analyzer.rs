use roster_model::{DataType, ParsedTable, PlayerAnalysis};
use tracing::debug;

use crate::{batting, classify::classify, pitching};

/// Classifies `table` and summarizes it under `file_name`.
///
/// Unknown datasets keep an empty breakdown and carry no insights, warnings,
/// or recommendations.
pub fn analyze(table: &ParsedTable, file_name: &str) -> PlayerAnalysis {
    let data_type = classify(&table.headers);
    debug!(file = %file_name, %data_type, rows = table.len(), "classified dataset");
    let mut analysis = PlayerAnalysis::empty(file_name, data_type, table.len());
    match data_type {
        DataType::Batting => batting::summarize(table, &mut analysis),
        DataType::Pitching => pitching::summarize(table, &mut analysis),
        DataType::Unknown => {}
    }
    analysis
}
