//! CSV reading for the CLI host.
//!
//! Warehouse exports come from several systems that disagree on the
//! delimiter and like to prepend a BOM. The reader sniffs `;`, `,` and tab
//! in that order and accepts the first one that yields at least three
//! columns. All cells stay strings; typing is the engine's job.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::table::RawTable;
use crate::ui::messages::warning;
use std::fs;
use std::path::Path;

const DELIMITERS: &[u8] = &[b';', b',', b'\t'];

/// Minimum plausible column count for a task export.
pub const MIN_COLS: usize = 3;

/// Read one export file into a `RawTable`, enforcing the configured size
/// limits: extra rows are truncated with a warning, extra columns are a
/// hard error.
pub fn read_table(path: &Path, cfg: &Config) -> AppResult<RawTable> {
    let bytes = fs::read(path)?;
    let text = decode(&bytes);

    let table = sniff_delimiter(&text).ok_or_else(|| {
        AppError::Input(format!(
            "{}: could not detect a delimiter yielding at least {} columns",
            path.display(),
            MIN_COLS
        ))
    })?;

    if table.column_count() > cfg.max_cols {
        return Err(AppError::TooManyColumns {
            got: table.column_count(),
            max: cfg.max_cols,
        });
    }

    let mut table = table;
    if table.row_count() > cfg.max_rows {
        warning(format!(
            "{}: truncated to the first {} rows",
            path.display(),
            cfg.max_rows
        ));
        table.rows.truncate(cfg.max_rows);
    }

    Ok(table)
}

/// UTF-8 with BOM tolerance; invalid bytes are replaced rather than
/// failing the whole file.
fn decode(bytes: &[u8]) -> String {
    let stripped = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    String::from_utf8_lossy(stripped).into_owned()
}

fn sniff_delimiter(text: &str) -> Option<RawTable> {
    DELIMITERS
        .iter()
        .find_map(|&delim| parse_with_delimiter(text, delim).filter(|t| t.column_count() >= MIN_COLS))
}

fn parse_with_delimiter(text: &str, delimiter: u8) -> Option<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(Ok(rec)) => rec.iter().map(str::to_string).collect(),
        _ => return None,
    };

    let mut table = RawTable::new(headers);
    for rec in records {
        match rec {
            Ok(rec) => table.push_row(rec.iter().map(str::to_string).collect()),
            Err(_) => return None,
        }
    }
    Some(table)
}
