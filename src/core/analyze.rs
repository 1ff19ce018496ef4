//! The analysis pipeline: one pure function from a string table to the
//! per-worker report. No I/O, no shared state; every call recomputes from
//! scratch.

use crate::core::aggregate::{aggregate, hourly_histogram};
use crate::core::breaks::compute_breaks_and_active_time;
use crate::core::parse::datetime::parse_datetime_column;
use crate::core::parse::duration::parse_confirm_duration;
use crate::core::parse::number::{parse_qty, parse_weight_kg};
use crate::core::sanitize::{FieldRow, dedup_tasks, remove_summary_rows};
use crate::core::schema::{ColumnMap, resolve_columns};
use crate::errors::{AppError, AppResult};
use crate::models::EmployeeMap;
use crate::models::record::WorkRecord;
use crate::models::summary::AnalysisReport;
use crate::models::table::RawTable;
use chrono::NaiveDateTime;

/// Analyze one table of task confirmations.
///
/// The table must already be size-validated by the caller; this function
/// enforces structure (resolvable mandatory columns, at least one data row
/// surviving sanitization) but never rejects rows over bad values.
pub fn analyze_table(
    table: &RawTable,
    employees: Option<&EmployeeMap>,
) -> AppResult<AnalysisReport> {
    if table.is_empty() {
        return Err(AppError::EmptyInput);
    }

    let columns = resolve_columns(table)?;
    let rows = select_fields(table, &columns);
    let rows = remove_summary_rows(rows);
    if rows.is_empty() {
        return Err(AppError::EmptyInput);
    }

    let records = normalize_rows(rows);
    let records = dedup_tasks(records);

    let (active, breaks) = compute_breaks_and_active_time(&records);
    let summary = aggregate(&records, &active, &breaks, employees);
    let hourly = hourly_histogram(&records);

    Ok(AnalysisReport {
        summary,
        breaks_by_approver: breaks,
        hourly_by_approver: hourly,
    })
}

/// Pull the resolved columns out of the table as raw text rows.
fn select_fields(table: &RawTable, columns: &ColumnMap) -> Vec<FieldRow> {
    (0..table.row_count())
        .map(|r| FieldRow {
            approver: table.cell(r, columns.approver).to_string(),
            task: table.cell(r, columns.task).to_string(),
            weight: table.cell(r, columns.weight).to_string(),
            qty: table.cell(r, columns.qty).to_string(),
            confirm: table.cell(r, columns.confirm_time).to_string(),
            start: columns.start_time.map(|c| table.cell(r, c).to_string()),
            end: columns.end_time.map(|c| table.cell(r, c).to_string()),
            event: columns.event_time.map(|c| table.cell(r, c).to_string()),
        })
        .collect()
}

/// Typed parsing of the sanitized rows. Datetime columns are detected as
/// whole columns (ranked formats); numbers and durations per cell, all
/// total. The confirm column doubles as an end-timestamp source: where it
/// parses as a datetime it backfills a missing end time, and a resolvable
/// start/end pair overrides the textual confirm duration.
fn normalize_rows(rows: Vec<FieldRow>) -> Vec<WorkRecord> {
    let start_dts = parse_optional_column(&rows, |r| r.start.as_deref());
    let end_dts = parse_optional_column(&rows, |r| r.end.as_deref());
    let event_dts = parse_optional_column(&rows, |r| r.event.as_deref());

    let confirm_cells: Vec<&str> = rows.iter().map(|r| r.confirm.as_str()).collect();
    let (_, confirm_dts) = parse_datetime_column(&confirm_cells);

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            let start_dt = start_dts.as_ref().and_then(|col| col[i]);
            let end_dt = end_dts
                .as_ref()
                .and_then(|col| col[i])
                .or(confirm_dts[i]);
            let event_dt = event_dts.as_ref().and_then(|col| col[i]);

            let confirm_td = match (start_dt, end_dt) {
                (Some(s), Some(e)) => e - s,
                _ => parse_confirm_duration(&row.confirm),
            };

            WorkRecord {
                weight_kg: parse_weight_kg(&row.weight),
                qty: parse_qty(&row.qty),
                confirm_td,
                start_dt,
                end_dt,
                event_dt,
                approver: row.approver,
                task: row.task,
                confirm_raw: row.confirm,
                start_raw: row.start,
                end_raw: row.end,
                event_raw: row.event,
            }
        })
        .collect()
}

fn parse_optional_column<'a, F>(
    rows: &'a [FieldRow],
    field: F,
) -> Option<Vec<Option<NaiveDateTime>>>
where
    F: Fn(&'a FieldRow) -> Option<&'a str>,
{
    let cells: Option<Vec<&str>> = rows.iter().map(&field).collect();
    cells.map(|cells| parse_datetime_column(&cells).1)
}
