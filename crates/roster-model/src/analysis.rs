use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Dataset classification derived from header names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Batting,
    Pitching,
    Unknown,
}

impl DataType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Batting => "Batting",
            Self::Pitching => "Pitching",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rounded average together with the exact text shown to the user.
///
/// Threshold rules compare [`Average::value`], which is the rounded number,
/// so what is displayed is what is judged.
#[derive(Debug, Clone, PartialEq)]
pub struct Average {
    value: f64,
    text: String,
}

impl Average {
    pub fn new(value: f64, text: impl Into<String>) -> Self {
        Self {
            value,
            text: text.into(),
        }
    }

    /// The literal `0` reported when nothing qualified for the average.
    pub fn zero() -> Self {
        Self::new(0.0, "0")
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Average {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Average {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let value = text
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid average '{text}'")))?;
        Ok(Self { value, text })
    }
}

/// Metric name to average, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsBreakdown {
    entries: Vec<(String, Average)>,
}

impl StatsBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a metric. Replacing keeps the original position.
    pub fn insert(&mut self, metric: impl Into<String>, average: Average) {
        let metric = metric.into();
        match self.entries.iter_mut().find(|(name, _)| *name == metric) {
            Some((_, existing)) => *existing = average,
            None => self.entries.push((metric, average)),
        }
    }

    pub fn get(&self, metric: &str) -> Option<&Average> {
        self.entries
            .iter()
            .find(|(name, _)| name == metric)
            .map(|(_, average)| average)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Average)> {
        self.entries
            .iter()
            .map(|(name, average)| (name.as_str(), average))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for StatsBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, average) in &self.entries {
            map.serialize_entry(name, average)?;
        }
        map.end()
    }
}

struct StatsBreakdownVisitor;

impl<'de> Visitor<'de> for StatsBreakdownVisitor {
    type Value = StatsBreakdown;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of metric names to numeric strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut breakdown = StatsBreakdown::new();
        while let Some((name, average)) = access.next_entry::<String, Average>()? {
            breakdown.insert(name, average);
        }
        Ok(breakdown)
    }
}

impl<'de> Deserialize<'de> for StatsBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StatsBreakdownVisitor)
    }
}

/// Summary of one parsed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAnalysis {
    pub file_name: String,
    pub data_type: DataType,
    /// Every parsed row, active or not.
    pub total_players: usize,
    pub insights: Vec<String>,
    pub warnings: Vec<String>,
    pub opportunities: Vec<String>,
    pub stats_breakdown: StatsBreakdown,
}

impl PlayerAnalysis {
    /// An analysis with no findings yet.
    pub fn empty(file_name: impl Into<String>, data_type: DataType, total_players: usize) -> Self {
        Self {
            file_name: file_name.into(),
            data_type,
            total_players,
            insights: Vec::new(),
            warnings: Vec::new(),
            opportunities: Vec::new(),
            stats_breakdown: StatsBreakdown::new(),
        }
    }
}

/// Totals folded over every analysis of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedAnalysis {
    pub file_count: usize,
    pub total_players: usize,
    /// Warnings prefixed with `[file name] `, in file order.
    pub warnings: Vec<String>,
    pub batting_count: usize,
    pub pitching_count: usize,
}

/// Output of one "analyze all" action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRun {
    pub analyses: Vec<PlayerAnalysis>,
    pub combined: CombinedAnalysis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_keeps_insertion_order() {
        let mut stats = StatsBreakdown::new();
        stats.insert("avgStuff", Average::new(40.0, "40.0"));
        stats.insert("avgControl", Average::new(30.0, "30.0"));
        stats.insert("avgStuff", Average::new(41.0, "41.0"));
        let names: Vec<&str> = stats.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["avgStuff", "avgControl"]);
        assert_eq!(stats.get("avgStuff").map(Average::as_str), Some("41.0"));
    }

    #[test]
    fn zero_average_is_literal_zero() {
        let zero = Average::zero();
        assert_eq!(zero.as_str(), "0");
        assert_eq!(zero.value(), 0.0);
    }
}
