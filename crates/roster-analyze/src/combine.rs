use roster_model::{CombinedAnalysis, DataType, PlayerAnalysis};

/// Folds per-file analyses into run totals.
///
/// Warnings are tagged with their file name and keep file order, then
/// per-file order.
pub fn combine(analyses: &[PlayerAnalysis]) -> CombinedAnalysis {
    let count_of = |data_type: DataType| {
        analyses
            .iter()
            .filter(|analysis| analysis.data_type == data_type)
            .count()
    };
    CombinedAnalysis {
        file_count: analyses.len(),
        total_players: analyses.iter().map(|analysis| analysis.total_players).sum(),
        warnings: analyses
            .iter()
            .flat_map(|analysis| {
                analysis
                    .warnings
                    .iter()
                    .map(move |warning| format!("[{}] {warning}", analysis.file_name))
            })
            .collect(),
        batting_count: count_of(DataType::Batting),
        pitching_count: count_of(DataType::Pitching),
    }
}
