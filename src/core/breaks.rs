//! Break detection and active-time computation.
//!
//! A worker's productive window is the span between their first and last
//! recorded event. Gaps above 10 minutes between adjacent events are
//! breaks and get subtracted from that window; shorter gaps are normal
//! task-to-task latency and stay in. Breaks at the edges (before the first
//! or after the last event) are invisible to this model.

use crate::models::record::WorkRecord;
use crate::models::summary::BreakMap;
use crate::utils::formatting::format_duration_hhmm;
use chrono::TimeDelta;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Gaps at or under this length are not breaks.
fn min_break() -> TimeDelta {
    TimeDelta::minutes(10)
}

/// One detected idle period, with the surrounding records kept as plain
/// string maps for display.
#[derive(Debug, Clone, Serialize)]
pub struct BreakEvent {
    #[serde(serialize_with = "ser_hhmm")]
    pub duration: TimeDelta,
    /// Reporting tier: 45, 30 or 15 by duration threshold. Gaps between 10
    /// and 15 minutes get bucket 0, subtracted from active time but shown
    /// in no count column.
    pub bucket: u8,
    pub before: BTreeMap<String, String>,
    pub after: BTreeMap<String, String>,
}

fn ser_hhmm<S: Serializer>(td: &TimeDelta, ser: S) -> Result<S::Ok, S::Error> {
    ser.serialize_str(&format_duration_hhmm(*td))
}

fn classify_bucket(gap: TimeDelta) -> u8 {
    if gap >= TimeDelta::minutes(45) {
        45
    } else if gap >= TimeDelta::minutes(30) {
        30
    } else if gap >= TimeDelta::minutes(15) {
        15
    } else {
        0
    }
}

/// Per-worker active time and itemized breaks.
///
/// Records without any usable timestamp contribute nothing; a worker with
/// fewer than two timestamped events gets zero active time and no breaks.
pub fn compute_breaks_and_active_time(
    records: &[WorkRecord],
) -> (BTreeMap<String, TimeDelta>, BreakMap) {
    // sorted (timestamp, record index) sequences per approver
    let mut by_approver: BTreeMap<&str, Vec<(chrono::NaiveDateTime, usize)>> = BTreeMap::new();
    for (idx, rec) in records.iter().enumerate() {
        if let Some(dt) = rec.primary_dt() {
            by_approver.entry(rec.approver.as_str()).or_default().push((dt, idx));
        }
    }

    let mut active: BTreeMap<String, TimeDelta> = BTreeMap::new();
    let mut breaks: BreakMap = BTreeMap::new();

    for (approver, mut events) in by_approver {
        events.sort_by_key(|(dt, _)| *dt);

        if events.len() < 2 {
            active.insert(approver.to_string(), TimeDelta::zero());
            continue;
        }

        let window = events[events.len() - 1].0 - events[0].0;
        let mut subtracted = TimeDelta::zero();

        for pair in events.windows(2) {
            let (prev_dt, prev_idx) = pair[0];
            let (cur_dt, cur_idx) = pair[1];
            let gap = cur_dt - prev_dt;
            if gap <= min_break() {
                continue;
            }
            subtracted += gap;
            breaks
                .entry(approver.to_string())
                .or_default()
                .push(BreakEvent {
                    duration: gap,
                    bucket: classify_bucket(gap),
                    before: records[prev_idx].snapshot(),
                    after: records[cur_idx].snapshot(),
                });
        }

        let active_td = (window - subtracted).max(TimeDelta::zero());
        active.insert(approver.to_string(), active_td);
    }

    (active, breaks)
}
