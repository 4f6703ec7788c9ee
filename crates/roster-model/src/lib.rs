//! Plain data types shared by the roster ingestion, analysis, and CLI crates.
//!
//! Nothing in here performs I/O or analysis; every type is created fresh per
//! run and treated as immutable once built.

pub mod analysis;
pub mod table;
pub mod upload;

pub use analysis::{
    AnalysisRun, Average, CombinedAnalysis, DataType, PlayerAnalysis, StatsBreakdown,
};
pub use table::{ParsedTable, Row};
pub use upload::{FileId, UploadedFile};
