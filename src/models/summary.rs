//! Aggregated per-worker output of one analysis call.

use crate::core::breaks::BreakEvent;
use chrono::TimeDelta;
use std::collections::BTreeMap;

/// One output row of the summary table. Values are already rounded the way
/// the report presents them: weight to 2 decimals, qty to a whole number,
/// speed to 2 decimals.
#[derive(Debug, Clone)]
pub struct WorkerSummary {
    /// Present only when a worker→company reference file was supplied.
    pub company: Option<String>,
    pub approver: String,
    pub task_count: u64,
    pub weight_sum: f64,
    pub qty_sum: f64,
    /// Tasks per minute of active time; 0 when there is no active time.
    pub speed: f64,
    pub active_time: TimeDelta,
    /// Sum of per-task confirm durations. Informational only.
    pub confirm_total: TimeDelta,
    pub breaks_15: u32,
    pub breaks_30: u32,
    pub breaks_45: u32,
}

/// Break list per approver, in chronological order.
pub type BreakMap = BTreeMap<String, Vec<BreakEvent>>;

/// Tasks per hour of day (9..=20) per approver.
pub type HourlyMap = BTreeMap<String, BTreeMap<u8, u32>>;

/// Composite result of `analyze_table`: the ranked summary plus the two
/// side maps. An explicit struct, owned by the caller from here on.
#[derive(Debug, Default)]
pub struct AnalysisReport {
    pub summary: Vec<WorkerSummary>,
    pub breaks_by_approver: BreakMap,
    pub hourly_by_approver: HourlyMap,
}
