//! Per-worker aggregation: sums, speed, ranking, hourly histogram.

use crate::core::parse::datetime::extract_hour_from_text;
use crate::models::EmployeeMap;
use crate::models::record::WorkRecord;
use crate::models::summary::{BreakMap, HourlyMap, WorkerSummary};
use crate::utils::formatting::round2;
use chrono::{TimeDelta, Timelike};
use std::collections::{BTreeMap, BTreeSet};

/// Hours of day the histogram reports on.
pub const HOUR_FIRST: u8 = 9;
pub const HOUR_LAST: u8 = 20;

struct Acc {
    tasks: BTreeSet<String>,
    weight: f64,
    qty: f64,
    confirm: TimeDelta,
}

impl Acc {
    fn new() -> Self {
        Self {
            tasks: BTreeSet::new(),
            weight: 0.0,
            qty: 0.0,
            confirm: TimeDelta::zero(),
        }
    }
}

/// Build the ranked summary table from deduplicated records plus the break
/// engine's output. Sorting: task count descending, speed descending.
pub fn aggregate(
    records: &[WorkRecord],
    active: &BTreeMap<String, TimeDelta>,
    breaks: &BreakMap,
    employees: Option<&EmployeeMap>,
) -> Vec<WorkerSummary> {
    let mut groups: BTreeMap<&str, Acc> = BTreeMap::new();
    for rec in records {
        let acc = groups.entry(rec.approver.as_str()).or_insert_with(Acc::new);
        acc.tasks.insert(rec.task.clone());
        acc.weight += rec.weight_kg;
        acc.qty += rec.qty;
        acc.confirm += rec.confirm_td;
    }

    let mut summary: Vec<WorkerSummary> = groups
        .into_iter()
        .map(|(approver, acc)| {
            let active_time = active.get(approver).copied().unwrap_or_else(TimeDelta::zero);
            let task_count = acc.tasks.len() as u64;

            let active_minutes = active_time.num_seconds() as f64 / 60.0;
            let speed = if active_minutes > 0.0 {
                round2(task_count as f64 / active_minutes)
            } else {
                0.0
            };

            let count_bucket = |bucket: u8| -> u32 {
                breaks
                    .get(approver)
                    .map(|list| list.iter().filter(|b| b.bucket == bucket).count() as u32)
                    .unwrap_or(0)
            };

            WorkerSummary {
                company: employees.and_then(|m| m.get(approver.trim()).cloned()),
                approver: approver.to_string(),
                task_count,
                weight_sum: round2(acc.weight),
                qty_sum: acc.qty.round(),
                speed,
                active_time,
                confirm_total: acc.confirm,
                breaks_15: count_bucket(15),
                breaks_30: count_bucket(30),
                breaks_45: count_bucket(45),
            }
        })
        .collect();

    summary.sort_by(|a, b| {
        b.task_count
            .cmp(&a.task_count)
            .then_with(|| b.speed.total_cmp(&a.speed))
    });
    summary
}

/// Tasks per hour of day (9..=20) per worker, over the deduplicated
/// records. Hour source priority mirrors the break engine (event, end,
/// start); a record without any parsed timestamp still counts through an
/// `HH:MM` prefix in its raw confirm text. A worker's map materializes
/// with all reporting hours at zero on their first retained record.
pub fn hourly_histogram(records: &[WorkRecord]) -> HourlyMap {
    let mut hourly: HourlyMap = BTreeMap::new();

    for rec in records {
        let hour = rec
            .event_dt
            .or(rec.end_dt)
            .or(rec.start_dt)
            .map(|dt| dt.hour() as u8)
            .or_else(|| extract_hour_from_text(&rec.confirm_raw));

        let Some(h) = hour else { continue };
        if !(HOUR_FIRST..=HOUR_LAST).contains(&h) {
            continue;
        }

        let slots = hourly.entry(rec.approver.trim().to_string()).or_insert_with(|| {
            (HOUR_FIRST..=HOUR_LAST).map(|hh| (hh, 0)).collect()
        });
        *slots.entry(h).or_insert(0) += 1;
    }

    hourly
}
