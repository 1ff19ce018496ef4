//! Loader for the worker → company reference file.
//!
//! A small CSV maintained by hand: one row per worker, with the company
//! they are assigned to. Header names vary as much as in the task exports,
//! so the same normalized-variant matching applies, with a positional
//! fallback (first column = worker, second = company) for headerless-ish
//! files.

use crate::core::schema::normalize_column_name;
use crate::errors::{AppError, AppResult};
use crate::models::EmployeeMap;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const APPROVER_VARIANTS: &[&str] = &[
    "утвердил",
    "утвердил:",
    "approver",
    "сотрудник",
    "фио",
    "логин",
];

const COMPANY_VARIANTS: &[&str] = &["компания", "company", "фирма", "организация"];

/// Read the reference file into a worker → company map. Keys and values
/// are trimmed; the first occurrence of a worker wins.
pub fn load_employee_map(path: &Path) -> AppResult<EmployeeMap> {
    let bytes = fs::read(path)?;
    let text = {
        let stripped = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(&bytes);
        String::from_utf8_lossy(stripped).into_owned()
    };

    for &delim in &[b';', b',', b'\t'] {
        if let Some(map) = try_parse(&text, delim) {
            return Ok(map);
        }
    }
    Err(AppError::Input(format!(
        "{}: could not read worker/company reference (need at least two columns)",
        path.display()
    )))
}

fn try_parse(text: &str, delimiter: u8) -> Option<EmployeeMap> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for rec in reader.records() {
        match rec {
            Ok(rec) => rows.push(rec.iter().map(str::to_string).collect()),
            Err(_) => return None,
        }
    }

    let headers = rows.first()?;
    if headers.len() < 2 {
        return None;
    }

    let find = |variants: &[&str]| -> Option<usize> {
        variants.iter().find_map(|v| {
            let vn = normalize_column_name(v);
            headers.iter().position(|h| normalize_column_name(h) == vn)
        })
    };

    let approver_col = find(APPROVER_VARIANTS).unwrap_or(0);
    let company_col = find(COMPANY_VARIANTS).unwrap_or(1);

    let mut map: EmployeeMap = BTreeMap::new();
    for row in rows.iter().skip(1) {
        let approver = row.get(approver_col).map(|s| s.trim()).unwrap_or("");
        let company = row.get(company_col).map(|s| s.trim()).unwrap_or("");
        if approver.is_empty() {
            continue;
        }
        map.entry(approver.to_string())
            .or_insert_with(|| company.to_string());
    }
    Some(map)
}
