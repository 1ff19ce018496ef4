// src/export/model.rs

use crate::models::summary::WorkerSummary;
use crate::utils::formatting::format_duration_hhmm;
use serde::Serialize;

/// Flat, already-formatted summary row for export. Field names mirror the
/// report columns the warehouse managers know.
#[derive(Serialize, Clone, Debug)]
pub struct SummaryExport {
    #[serde(rename = "Компания", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(rename = "Утвердил")]
    pub approver: String,
    #[serde(rename = "СЗ")]
    pub task_count: u64,
    #[serde(rename = "Вес")]
    pub weight_sum: f64,
    #[serde(rename = "Шт")]
    pub qty_sum: i64,
    #[serde(rename = "скорость")]
    pub speed: f64,
    #[serde(rename = "Время")]
    pub active_time: String,
    #[serde(rename = "b15")]
    pub breaks_15: u32,
    #[serde(rename = "b30")]
    pub breaks_30: u32,
    #[serde(rename = "b45")]
    pub breaks_45: u32,
}

impl SummaryExport {
    pub fn from_summary(s: &WorkerSummary) -> Self {
        Self {
            company: s.company.clone(),
            approver: s.approver.clone(),
            task_count: s.task_count,
            weight_sum: s.weight_sum,
            qty_sum: s.qty_sum as i64,
            speed: s.speed,
            active_time: format_duration_hhmm(s.active_time),
            breaks_15: s.breaks_15,
            breaks_30: s.breaks_30,
            breaks_45: s.breaks_45,
        }
    }
}

/// Header row for CSV / XLSX and the terminal table.
pub(crate) fn get_headers(with_company: bool) -> Vec<&'static str> {
    let mut headers = vec![
        "Утвердил",
        "СЗ",
        "Вес",
        "Шт",
        "скорость",
        "Время",
        "b15",
        "b30",
        "b45",
    ];
    if with_company {
        headers.insert(0, "Компания");
    }
    headers
}

/// Convert one export row into plain strings, in header order.
pub(crate) fn summary_to_row(s: &SummaryExport, with_company: bool) -> Vec<String> {
    let mut row = vec![
        s.approver.clone(),
        s.task_count.to_string(),
        format!("{:.2}", s.weight_sum),
        s.qty_sum.to_string(),
        format!("{:.2}", s.speed),
        s.active_time.clone(),
        s.breaks_15.to_string(),
        s.breaks_30.to_string(),
        s.breaks_45.to_string(),
    ];
    if with_company {
        row.insert(0, s.company.clone().unwrap_or_default());
    }
    row
}

pub(crate) fn summaries_to_table(rows: &[SummaryExport], with_company: bool) -> Vec<Vec<String>> {
    rows.iter().map(|r| summary_to_row(r, with_company)).collect()
}
