//! Column resolution: maps the wildly inconsistent header names of export
//! files onto the logical fields the engine works with.

use crate::core::parse::number::normalize_weight;
use crate::errors::{AppError, AppResult};
use crate::models::table::RawTable;
use std::collections::HashMap;

/// Logical fields the engine understands. The first five are mandatory on
/// every input; the rest enable optional features when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalField {
    Approver,
    Task,
    Weight,
    Qty,
    ConfirmTime,
    StartTime,
    EndTime,
    EventTime,
    Company,
}

impl LogicalField {
    pub fn name(&self) -> &'static str {
        match self {
            LogicalField::Approver => "approver",
            LogicalField::Task => "task",
            LogicalField::Weight => "weight",
            LogicalField::Qty => "qty",
            LogicalField::ConfirmTime => "confirm_time",
            LogicalField::StartTime => "start_time",
            LogicalField::EndTime => "end_time",
            LogicalField::EventTime => "event_time",
            LogicalField::Company => "company",
        }
    }
}

/// Accepted header variants per logical field, in priority order. The
/// Russian names are the ones the warehouse system actually exports.
pub fn candidate_variants(field: LogicalField) -> &'static [&'static str] {
    match field {
        LogicalField::Approver => &["Утвердил:"],
        LogicalField::Task => &["Складская задача"],
        LogicalField::Weight => &["Вес груза"],
        LogicalField::Qty => &["ИсходЦелКолич в БЕИ"],
        LogicalField::ConfirmTime => &[
            "времяподтверждения",
            "время подтверждения",
            "подтвержденовремя",
            "длитработы",
            "вработевремя",
        ],
        LogicalField::StartTime => &[
            "временачала",
            "время начала",
            "начало",
            "датавремянч",
            "датаначала",
            "start",
            "starttime",
        ],
        LogicalField::EndTime => &[
            "времязавершения",
            "завершение",
            "датавремяокончания",
            "датаокончания",
            "end",
            "endtime",
        ],
        LogicalField::EventTime => &["время", "датавремя", "подтверждено", "timestamp", "datetime"],
        LogicalField::Company => &["компания", "company"],
    }
}

/// Normalized header form used for matching: lowercase, with whitespace,
/// NBSP and `: . - _` removed. "Утвердил:" and " утвердил " compare equal.
pub fn normalize_column_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ':' | '.' | '-' | '_' | ' ' | '\u{00A0}'))
        .collect()
}

/// Resolved column indices into a `RawTable`.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub approver: usize,
    pub task: usize,
    pub weight: usize,
    pub qty: usize,
    pub confirm_time: usize,
    pub start_time: Option<usize>,
    pub end_time: Option<usize>,
    pub event_time: Option<usize>,
}

const MANDATORY: &[LogicalField] = &[
    LogicalField::Approver,
    LogicalField::Task,
    LogicalField::Weight,
    LogicalField::Qty,
    LogicalField::ConfirmTime,
];

const OPTIONAL: &[LogicalField] = &[
    LogicalField::StartTime,
    LogicalField::EndTime,
    LogicalField::EventTime,
];

/// Resolve every logical field against the table headers.
///
/// Matching is order-independent with respect to the input columns: only
/// the normalized names take part, and the first variant in declaration
/// order wins. Fails with the full list of missing mandatory fields.
pub fn resolve_columns(table: &RawTable) -> AppResult<ColumnMap> {
    let mut normalized_to_index: HashMap<String, usize> = HashMap::new();
    for (i, header) in table.headers.iter().enumerate() {
        // later duplicates overwrite earlier ones; the weight field gets
        // its own disambiguation below
        normalized_to_index.insert(normalize_column_name(header), i);
    }

    let lookup = |field: LogicalField| -> Option<usize> {
        candidate_variants(field)
            .iter()
            .find_map(|variant| normalized_to_index.get(&normalize_column_name(variant)).copied())
    };

    let mut resolved: HashMap<LogicalField, usize> = HashMap::new();
    for field in MANDATORY.iter().chain(OPTIONAL.iter()) {
        if let Some(idx) = lookup(*field) {
            resolved.insert(*field, idx);
        }
    }

    let missing: Vec<String> = MANDATORY
        .iter()
        .filter(|f| !resolved.contains_key(*f))
        .map(|f| f.name().to_string())
        .collect();
    if !missing.is_empty() {
        return Err(AppError::Schema { missing });
    }

    let mut map = ColumnMap {
        approver: resolved[&LogicalField::Approver],
        task: resolved[&LogicalField::Task],
        weight: resolved[&LogicalField::Weight],
        qty: resolved[&LogicalField::Qty],
        confirm_time: resolved[&LogicalField::ConfirmTime],
        start_time: resolved.get(&LogicalField::StartTime).copied(),
        end_time: resolved.get(&LogicalField::EndTime).copied(),
        event_time: resolved.get(&LogicalField::EventTime).copied(),
    };
    map.weight = disambiguate_weight(table, map.weight);
    Ok(map)
}

/// Some spreadsheets carry two columns that both display as "Вес груза":
/// the numeric weight and its unit of measure. When several headers
/// normalize to the weight name, keep the column whose parsed values yield
/// the most strictly-positive numbers; ties (and all-zero candidates)
/// resolve to the first such column in table order.
fn disambiguate_weight(table: &RawTable, fallback: usize) -> usize {
    let weight_key = normalize_column_name(candidate_variants(LogicalField::Weight)[0]);
    let candidates: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(_, h)| normalize_column_name(h) == weight_key)
        .map(|(i, _)| i)
        .collect();
    if candidates.len() < 2 {
        return fallback;
    }

    let mut best_col = candidates[0];
    let mut best_score: i64 = -1;
    for col in candidates {
        let score = table
            .column(col)
            .iter()
            .filter(|v| normalize_weight(v).is_some_and(|w| w > 0.0))
            .count() as i64;
        if score > best_score {
            best_score = score;
            best_col = col;
        }
    }
    best_col
}
