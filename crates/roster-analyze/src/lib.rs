//! Roster analysis.
//!
//! Classifies parsed tables as batting or pitching data, computes rating
//! averages over the qualifying players, and attaches threshold warnings.
//! Every entry point is a pure function of its inputs.
//!
//! # Example
//!
//! ```ignore
//! use roster_analyze::{analyze_inputs, PASTED_DATA_NAME};
//! use roster_model::UploadedFile;
//!
//! let files = vec![UploadedFile::new("hitters.csv", text)];
//! let run = analyze_inputs(&files, None)?;
//! println!("{} players", run.combined.total_players);
//! ```

mod analyzer;
mod batting;
mod classify;
mod columns;
mod combine;
mod error;
mod pipeline;
mod pitching;
pub mod rules;
mod stats;

pub use analyzer::analyze;
pub use batting::{BattingAggregate, BattingColumns};
pub use classify::classify;
pub use columns::field_as_int_or_zero;
pub use combine::combine;
pub use error::{AnalyzeError, Result};
pub use pipeline::{PASTED_DATA_NAME, analyze_inputs};
pub use pitching::{PitchingAggregate, PitchingColumns};
pub use stats::mean;
