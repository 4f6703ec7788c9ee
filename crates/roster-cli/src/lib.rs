//! CLI library components for the roster analyzer.

pub mod export;
pub mod logging;
pub mod session;
