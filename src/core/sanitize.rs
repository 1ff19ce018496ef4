//! Row cleaning: summary-row removal and task deduplication.
//!
//! Export files regularly contain spreadsheet artifacts ("Итого"/"Всего"
//! total lines, subtotal rows carrying nothing but a weight), and the
//! same task shows up twice when overlapping export batches are merged.
//! Everything here runs before aggregation so sums are counted once.

use crate::models::record::WorkRecord;
use chrono::NaiveDateTime;

/// Raw text of one row's resolved fields, prior to any typed parsing.
#[derive(Debug, Clone)]
pub struct FieldRow {
    pub approver: String,
    pub task: String,
    pub weight: String,
    pub qty: String,
    pub confirm: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub event: Option<String>,
}

/// A cell that carries no usable value.
pub fn is_blank(value: &str) -> bool {
    let s = value.trim().to_lowercase();
    s.is_empty() || s == "nan" || s == "none"
}

/// Localized "Total"/"Grand Total" markers at the start of a cell.
pub fn looks_like_total(value: &str) -> bool {
    let s = value.trim().to_lowercase();
    if s.is_empty() {
        return false;
    }
    s.starts_with("итого") || s.starts_with("итог") || s.starts_with("всего")
}

fn is_weight_only(row: &FieldRow) -> bool {
    if is_blank(&row.weight) {
        return false;
    }
    let others_blank = is_blank(&row.approver)
        && is_blank(&row.task)
        && is_blank(&row.qty)
        && is_blank(&row.confirm)
        && row.start.as_deref().is_none_or(is_blank)
        && row.end.as_deref().is_none_or(is_blank)
        && row.event.as_deref().is_none_or(is_blank);
    others_blank
}

/// Drop total rows (marker in approver or task) and weight-only subtotal
/// rows. Keeps everything else; noisy values are handled by the
/// normalizers, not here.
pub fn remove_summary_rows(rows: Vec<FieldRow>) -> Vec<FieldRow> {
    rows.into_iter()
        .filter(|r| !(looks_like_total(&r.approver) || looks_like_total(&r.task)))
        .filter(|r| !is_weight_only(r))
        .collect()
}

/// Timestamp used to decide which duplicate of a task is "last": end time
/// first, then event time, then start time.
fn dedup_ts(rec: &WorkRecord) -> Option<NaiveDateTime> {
    rec.end_dt.or(rec.event_dt).or(rec.start_dt)
}

/// Collapse repeated (approver, task) pairs to the single most recent
/// record, so that re-submitted exports never double-count weight or qty.
/// Rows without any timestamp sort earliest and lose to timestamped ones;
/// among equal keys the later input row wins (stable sort).
pub fn dedup_tasks(mut records: Vec<WorkRecord>) -> Vec<WorkRecord> {
    records.sort_by(|a, b| {
        (&a.approver, &a.task, dedup_ts(a)).cmp(&(&b.approver, &b.task, dedup_ts(b)))
    });

    let mut out: Vec<WorkRecord> = Vec::new();
    for rec in records {
        match out.last_mut() {
            Some(last) if last.approver == rec.approver && last.task == rec.task => *last = rec,
            _ => out.push(rec),
        }
    }
    out
}
