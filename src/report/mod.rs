// file: src/report/mod.rs
// description: console rendering and json export of search runs
// reference: internal module structure

pub mod formatter;
pub mod json;

pub use formatter::{FormattedResults, ResultFormatter};
pub use json::{ExportedReport, ReportExporter};
