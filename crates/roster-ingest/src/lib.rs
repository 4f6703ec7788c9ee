//! Roster data ingestion utilities.
//!
//! This crate turns raw roster exports into [`ParsedTable`] values and loads
//! export files from disk.
//!
//! # Features
//!
//! - **Text Parsing**: Split comma-delimited text into headers and rows
//! - **Lenient Integers**: Parse rating cells the forgiving way exports need
//! - **File Loading**: Read a batch of files into [`UploadedFile`] values
//! - **Discovery**: Expand directories into the CSV files they contain
//!
//! # Example
//!
//! ```ignore
//! use roster_ingest::parse_csv_text;
//!
//! let table = parse_csv_text("player_id,stuff\n1,50").expect("two lines");
//! assert_eq!(table.headers, vec!["player_id", "stuff"]);
//! ```
//!
//! [`ParsedTable`]: roster_model::ParsedTable
//! [`UploadedFile`]: roster_model::UploadedFile

mod csv_text;
mod discovery;
mod error;
mod numeric;
mod upload;

// === Error Types ===
pub use error::{IngestError, Result};

// === Text Parsing ===
pub use csv_text::{normalize_field, parse_csv_text, split_line};

// === Numeric Helpers ===
pub use numeric::{format_fixed_1, int_or_zero, parse_int_lenient};

// === File Loading ===
pub use upload::{read_upload, read_uploads};

// === File Discovery ===
pub use discovery::{expand_inputs, list_csv_files};
