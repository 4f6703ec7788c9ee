//! Batting roster summary.

use roster_model::{ParsedTable, PlayerAnalysis, StatsBreakdown};
use tracing::debug;

use crate::columns::{exact_column, field_as_int_or_zero};
use crate::rules::{self, AVG_CONTACT, AVG_POWER, AVG_SPEED, BATTING_RECOMMENDATION};
use crate::stats::mean;

pub const POWER_COLUMN: &str = "batting_ratings_overall_power";
pub const SPEED_COLUMN: &str = "running_ratings_speed";

/// Positions of the rating columns a batting summary reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattingColumns {
    pub contact: Option<usize>,
    pub power: Option<usize>,
    pub speed: Option<usize>,
}

impl BattingColumns {
    /// The contact column is the first header containing `contact` but not
    /// `talent`, which skips the scouting-potential column. Matching is
    /// case-sensitive. Power and speed need exact names.
    pub fn locate(table: &ParsedTable) -> Self {
        Self {
            contact: table.find_header(|h| h.contains("contact") && !h.contains("talent")),
            power: exact_column(table, POWER_COLUMN),
            speed: exact_column(table, SPEED_COLUMN),
        }
    }
}

/// Sums over the active hitters: those with contact or power above zero.
/// Sums are `i128` so saturated cells cannot overflow them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BattingAggregate {
    pub active_count: usize,
    pub contact_sum: i128,
    pub power_sum: i128,
    pub speed_sum: i128,
}

impl BattingAggregate {
    pub fn from_table(table: &ParsedTable) -> Self {
        let columns = BattingColumns::locate(table);
        debug!(?columns, "located batting columns");
        let mut aggregate = Self::default();
        for row in &table.rows {
            let contact = field_as_int_or_zero(table, row, columns.contact);
            let power = field_as_int_or_zero(table, row, columns.power);
            let speed = field_as_int_or_zero(table, row, columns.speed);
            if contact > 0 || power > 0 {
                aggregate.active_count += 1;
                aggregate.contact_sum += i128::from(contact);
                aggregate.power_sum += i128::from(power);
                aggregate.speed_sum += i128::from(speed);
            }
        }
        aggregate
    }

    pub fn breakdown(&self) -> StatsBreakdown {
        let mut stats = StatsBreakdown::new();
        stats.insert(AVG_CONTACT, mean(self.contact_sum, self.active_count));
        stats.insert(AVG_POWER, mean(self.power_sum, self.active_count));
        stats.insert(AVG_SPEED, mean(self.speed_sum, self.active_count));
        stats
    }
}

pub(crate) fn summarize(table: &ParsedTable, analysis: &mut PlayerAnalysis) {
    let aggregate = BattingAggregate::from_table(table);
    analysis.stats_breakdown = aggregate.breakdown();
    analysis
        .warnings
        .extend(rules::triggered(&rules::BATTING_WARNINGS, &analysis.stats_breakdown));
    analysis
        .insights
        .push(format!("Batting: {} players analyzed", table.len()));
    analysis
        .opportunities
        .push(BATTING_RECOMMENDATION.to_string());
    debug!(
        file = %analysis.file_name,
        active_count = aggregate.active_count,
        warning_count = analysis.warnings.len(),
        "summarized batting roster"
    );
}

#[cfg(test)]
mod tests {
    use roster_ingest::parse_csv_text;

    use super::*;

    #[test]
    fn contact_column_skips_talent() {
        let table = parse_csv_text(
            "batting_ratings_talent_contact,batting_ratings_overall_contact,x\n1,2,3",
        )
        .unwrap();
        assert_eq!(BattingColumns::locate(&table).contact, Some(1));
    }

    #[test]
    fn contact_match_is_case_sensitive() {
        let table = parse_csv_text("CONTACT,batting_ratings_overall_power\n10,20").unwrap();
        let columns = BattingColumns::locate(&table);
        assert_eq!(columns.contact, None);
        assert_eq!(columns.power, Some(1));
        assert_eq!(columns.speed, None);
    }

    #[test]
    fn active_requires_contact_or_power() {
        let table = parse_csv_text(
            "batting_ratings_overall_contact,batting_ratings_overall_power,running_ratings_speed\n\
             0,10,70\n0,0,99",
        )
        .unwrap();
        let aggregate = BattingAggregate::from_table(&table);
        assert_eq!(aggregate.active_count, 1);
        assert_eq!(aggregate.speed_sum, 70);

        let stats = aggregate.breakdown();
        assert_eq!(stats.get(AVG_POWER).unwrap().as_str(), "10.0");
        assert_eq!(stats.get(AVG_CONTACT).unwrap().as_str(), "0.0");
        assert_eq!(stats.get(AVG_SPEED).unwrap().as_str(), "70.0");
    }
}
