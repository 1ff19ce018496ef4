mod fs_utils;
mod json_csv;
mod model;
mod xlsx;

pub use model::SummaryExport;
pub(crate) use model::{get_headers, summary_to_row};

use crate::errors::AppResult;
use crate::models::summary::AnalysisReport;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Write the summary table of a finished analysis to `path`.
pub fn export_report(
    report: &AnalysisReport,
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    let with_company = report.summary.iter().any(|s| s.company.is_some());
    let rows: Vec<SummaryExport> = report.summary.iter().map(SummaryExport::from_summary).collect();

    match format {
        ExportFormat::Csv => json_csv::export_csv(&rows, with_company, path),
        ExportFormat::Json => json_csv::export_json(&rows, path),
        ExportFormat::Xlsx => xlsx::export_xlsx(&rows, with_company, path),
    }
}
