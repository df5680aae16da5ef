//! Output module
//! Formats analysis results for the console and for file export

pub mod formatter;

pub use formatter::{OutputFormatter, ReportGenerator};
