//! Column-level datetime detection.
//!
//! Export files carry timestamps in a handful of fixed layouts. Instead of
//! guessing per cell, the whole column is evaluated against a ranked list
//! of explicit formats; the first format that parses more than 80% of the
//! column wins. Only when none does, a lenient day-first per-cell fallback
//! takes over. Cells that still fail become None; the row itself is kept.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

/// Ranked candidate formats, day-first variants ahead of ISO.
pub const DATETIME_FORMATS: &[&str] = &[
    "%d.%m.%Y %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%d.%m.%Y",
    "%Y-%m-%d",
];

/// Extra layouts accepted by the lenient fallback only.
const LENIENT_FORMATS: &[&str] = &[
    "%d.%m.%Y %H:%M:%S%.f",
    "%d/%m/%Y %H:%M:%S%.f",
    "%d-%m-%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M",
    "%Y-%m-%d %H:%M",
    "%d.%m.%y %H:%M:%S",
    "%d.%m.%y %H:%M",
    "%d.%m.%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d.%m.%y",
];

/// Which parsing strategy ended up handling a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedFormat {
    /// One of `DATETIME_FORMATS` cleared the 80% threshold.
    Fixed(&'static str),
    /// Per-cell lenient day-first parsing.
    Lenient,
}

fn clean(cell: &str) -> Option<String> {
    let s = cell.trim();
    if s.is_empty() {
        return None;
    }
    let lower = s.to_lowercase();
    if lower == "nan" || lower == "none" || lower == "nat" {
        return None;
    }
    Some(s.replace('T', " "))
}

fn parse_with(s: &str, fmt: &str) -> Option<NaiveDateTime> {
    if fmt.contains("%H") {
        NaiveDateTime::parse_from_str(s, fmt).ok()
    } else {
        NaiveDate::parse_from_str(s, fmt)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }
}

fn parse_lenient(cell: &str) -> Option<NaiveDateTime> {
    let s = clean(cell)?;
    LENIENT_FORMATS.iter().find_map(|fmt| parse_with(&s, fmt))
}

/// Parse a whole column. Returns the strategy that was used together with
/// the per-row results; unparseable cells are None. Pure function, no
/// per-row control flow leaks out.
pub fn parse_datetime_column(values: &[&str]) -> (DetectedFormat, Vec<Option<NaiveDateTime>>) {
    if values.is_empty() {
        return (DetectedFormat::Lenient, Vec::new());
    }

    let threshold = values.len() as f64 * 0.8;
    for fmt in DATETIME_FORMATS {
        let parsed: Vec<Option<NaiveDateTime>> = values
            .iter()
            .map(|v| clean(v).and_then(|s| parse_with(&s, fmt)))
            .collect();
        let hits = parsed.iter().filter(|p| p.is_some()).count();
        if hits as f64 > threshold {
            return (DetectedFormat::Fixed(fmt), parsed);
        }
    }

    let parsed = values.iter().map(|v| parse_lenient(v)).collect();
    (DetectedFormat::Lenient, parsed)
}

static HOUR_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{1,2}):").expect("static regex"));

/// Pull an hour of day out of raw `HH:MM`-style text. Used as the hourly
/// histogram fallback when no timestamp column resolved.
pub fn extract_hour_from_text(value: &str) -> Option<u8> {
    let caps = HOUR_PREFIX.captures(value)?;
    let h: u8 = caps.get(1)?.as_str().parse().ok()?;
    if h <= 23 { Some(h) } else { None }
}
