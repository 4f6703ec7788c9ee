//! Errors surfaced to the user by an "analyze all" action.

use thiserror::Error;

/// Conditions that abort a run without touching previous results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    /// Neither files nor pasted text were supplied.
    #[error("Please upload CSV files or paste data first")]
    EmptyInput,

    /// Inputs were supplied but none produced a non-empty table.
    #[error("Could not parse any CSV data")]
    NoParseableData,
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalyzeError>;
