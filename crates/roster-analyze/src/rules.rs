//! Fixed warning thresholds and canned recommendations.
//!
//! Thresholds are strict: a rule fires only when the rounded average is
//! below it, so an average of exactly the threshold is fine.

use roster_model::{Average, DataType, StatsBreakdown};
use serde::Serialize;

pub const AVG_CONTACT: &str = "avgContact";
pub const AVG_POWER: &str = "avgPower";
pub const AVG_SPEED: &str = "avgSpeed";
pub const AVG_STUFF: &str = "avgStuff";
pub const AVG_CONTROL: &str = "avgControl";

pub const BATTING_RECOMMENDATION: &str = "Review lineup construction for efficiency";
pub const PITCHING_RECOMMENDATION: &str = "Evaluate rotation depth and bullpen options";

/// A threshold on one averaged metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningRule {
    pub data_type: DataType,
    pub metric: &'static str,
    pub threshold: f64,
    pub message: &'static str,
}

impl WarningRule {
    pub fn fires(&self, average: &Average) -> bool {
        average.value() < self.threshold
    }
}

pub const BATTING_WARNINGS: [WarningRule; 2] = [
    WarningRule {
        data_type: DataType::Batting,
        metric: AVG_POWER,
        threshold: 25.0,
        message: "Offensive power below average - consider upgrades",
    },
    WarningRule {
        data_type: DataType::Batting,
        metric: AVG_CONTACT,
        threshold: 20.0,
        message: "Contact ability weak - expect strikeouts",
    },
];

pub const PITCHING_WARNINGS: [WarningRule; 1] = [WarningRule {
    data_type: DataType::Pitching,
    metric: AVG_CONTROL,
    threshold: 28.0,
    message: "Pitching control weak - higher walk rates expected",
}];

/// Every rule, batting first.
pub fn all_rules() -> impl Iterator<Item = &'static WarningRule> {
    BATTING_WARNINGS.iter().chain(PITCHING_WARNINGS.iter())
}

/// Messages of the rules that fire against `stats`, in rule order.
pub fn triggered(rules: &[WarningRule], stats: &StatsBreakdown) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| stats.get(rule.metric).is_some_and(|avg| rule.fires(avg)))
        .map(|rule| rule.message.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn power(value: f64) -> StatsBreakdown {
        let mut stats = StatsBreakdown::new();
        stats.insert(AVG_POWER, Average::new(value, format!("{value:.1}")));
        stats.insert(AVG_CONTACT, Average::new(50.0, "50.0"));
        stats
    }

    #[test]
    fn threshold_is_strict() {
        assert_eq!(
            triggered(&BATTING_WARNINGS, &power(24.9)),
            vec!["Offensive power below average - consider upgrades"]
        );
        assert!(triggered(&BATTING_WARNINGS, &power(25.0)).is_empty());
    }

    #[test]
    fn missing_metric_never_fires() {
        assert!(triggered(&PITCHING_WARNINGS, &StatsBreakdown::new()).is_empty());
    }

    #[test]
    fn catalogue_lists_batting_first() {
        let metrics: Vec<&str> = all_rules().map(|rule| rule.metric).collect();
        assert_eq!(metrics, vec![AVG_POWER, AVG_CONTACT, AVG_CONTROL]);
    }
}
