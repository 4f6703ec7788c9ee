//! Pitching staff summary.

use roster_model::{ParsedTable, PlayerAnalysis, StatsBreakdown};
use tracing::debug;

use crate::columns::{exact_column, field_as_int_or_zero};
use crate::rules::{self, AVG_CONTROL, AVG_STUFF, PITCHING_RECOMMENDATION};
use crate::stats::mean;

pub const STUFF_COLUMN: &str = "pitching_ratings_overall_stuff";
pub const CONTROL_COLUMN: &str = "pitching_ratings_overall_control";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchingColumns {
    pub stuff: Option<usize>,
    pub control: Option<usize>,
}

impl PitchingColumns {
    pub fn locate(table: &ParsedTable) -> Self {
        Self {
            stuff: exact_column(table, STUFF_COLUMN),
            control: exact_column(table, CONTROL_COLUMN),
        }
    }
}

/// Sums over pitchers rated above zero for both stuff and control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PitchingAggregate {
    pub count: usize,
    pub stuff_sum: i128,
    pub control_sum: i128,
}

impl PitchingAggregate {
    pub fn from_table(table: &ParsedTable) -> Self {
        let columns = PitchingColumns::locate(table);
        debug!(?columns, "located pitching columns");
        let mut aggregate = Self::default();
        for row in &table.rows {
            let stuff = field_as_int_or_zero(table, row, columns.stuff);
            let control = field_as_int_or_zero(table, row, columns.control);
            if stuff > 0 && control > 0 {
                aggregate.count += 1;
                aggregate.stuff_sum += i128::from(stuff);
                aggregate.control_sum += i128::from(control);
            }
        }
        aggregate
    }

    pub fn breakdown(&self) -> StatsBreakdown {
        let mut stats = StatsBreakdown::new();
        stats.insert(AVG_STUFF, mean(self.stuff_sum, self.count));
        stats.insert(AVG_CONTROL, mean(self.control_sum, self.count));
        stats
    }
}

pub(crate) fn summarize(table: &ParsedTable, analysis: &mut PlayerAnalysis) {
    let aggregate = PitchingAggregate::from_table(table);
    analysis.stats_breakdown = aggregate.breakdown();
    analysis
        .warnings
        .extend(rules::triggered(&rules::PITCHING_WARNINGS, &analysis.stats_breakdown));
    analysis
        .insights
        .push(format!("Pitching: {} players analyzed", table.len()));
    analysis
        .opportunities
        .push(PITCHING_RECOMMENDATION.to_string());
    debug!(
        file = %analysis.file_name,
        qualified_count = aggregate.count,
        warning_count = analysis.warnings.len(),
        "summarized pitching staff"
    );
}
