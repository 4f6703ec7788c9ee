//! Dataset classification by header keywords.

use roster_model::DataType;

const BATTING_KEYWORDS: [&str; 3] = ["BATTING_RATINGS", "CONTACT", "POWER"];
const PITCHING_KEYWORDS: [&str; 3] = ["PITCHING_RATINGS", "STUFF", "CONTROL"];

/// Classifies a dataset from its header names.
///
/// Headers are upper-cased and joined with `|`, then searched for keywords.
/// Batting keywords are checked first, so a table carrying both kinds of
/// columns is batting data.
pub fn classify(headers: &[String]) -> DataType {
    let joined = headers.join("|").to_uppercase();
    if BATTING_KEYWORDS.iter().any(|kw| joined.contains(kw)) {
        DataType::Batting
    } else if PITCHING_KEYWORDS.iter().any(|kw| joined.contains(kw)) {
        DataType::Pitching
    } else {
        DataType::Unknown
    }
}
