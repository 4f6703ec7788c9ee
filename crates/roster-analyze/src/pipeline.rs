//! The "analyze all" action.

use roster_ingest::parse_csv_text;
use roster_model::{AnalysisRun, PlayerAnalysis, UploadedFile};
use tracing::{info, warn};

use crate::analyzer::analyze;
use crate::combine::combine;
use crate::error::{AnalyzeError, Result};

/// File name given to the pasted-text analysis.
pub const PASTED_DATA_NAME: &str = "Pasted Data";

fn analyze_text(text: &str, name: &str) -> Option<PlayerAnalysis> {
    match parse_csv_text(text) {
        Some(table) if !table.is_empty() => Some(analyze(&table, name)),
        _ => {
            warn!(input = %name, "skipping input with no data rows");
            None
        }
    }
}

/// Analyzes every file in order, then the pasted text if it is not blank.
///
/// Inputs that do not parse to at least one row are skipped. The run fails
/// with [`AnalyzeError::EmptyInput`] when nothing was supplied and with
/// [`AnalyzeError::NoParseableData`] when nothing survived parsing.
pub fn analyze_inputs(files: &[UploadedFile], pasted_text: Option<&str>) -> Result<AnalysisRun> {
    let pasted_text = pasted_text.filter(|text| !text.trim().is_empty());
    if files.is_empty() && pasted_text.is_none() {
        return Err(AnalyzeError::EmptyInput);
    }

    let mut analyses: Vec<PlayerAnalysis> = files
        .iter()
        .filter_map(|file| analyze_text(&file.raw_text, &file.name))
        .collect();
    if let Some(text) = pasted_text {
        analyses.extend(analyze_text(text, PASTED_DATA_NAME));
    }
    if analyses.is_empty() {
        return Err(AnalyzeError::NoParseableData);
    }

    let combined = combine(&analyses);
    info!(
        file_count = combined.file_count,
        total_players = combined.total_players,
        warning_count = combined.warnings.len(),
        "analysis complete"
    );
    Ok(AnalysisRun { analyses, combined })
}
