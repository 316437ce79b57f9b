//! CLI library components for rowcheck.

pub mod logging;
pub mod report;
