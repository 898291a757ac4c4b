// file: src/report/json.rs
// description: json export of a completed search run

use crate::error::Result;
use crate::pipeline::RunReport;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct ReportExporter {
    path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportedReport<'a> {
    pub generated_at: String,
    #[serde(flatten)]
    pub report: &'a RunReport,
}

impl ReportExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn export(&self, report: &RunReport, pretty: bool) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let exported = ExportedReport {
            generated_at: Utc::now().to_rfc3339(),
            report,
        };

        let json = if pretty {
            serde_json::to_string_pretty(&exported)?
        } else {
            serde_json::to_string(&exported)?
        };
        fs::write(&self.path, json)?;

        info!(
            "Exported {} results and {} themes to {}",
            report.results.len(),
            report.themes.len(),
            self.path.display()
        );
        Ok(())
    }
}
