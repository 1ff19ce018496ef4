// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{SummaryExport, get_headers, summary_to_row};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[SummaryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with the report header row.
pub(crate) fn export_csv(rows: &[SummaryExport], with_company: bool, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(get_headers(with_company))?;
    for item in rows {
        wtr.write_record(summary_to_row(item, with_company))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
