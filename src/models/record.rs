//! A single task confirmation after column resolution and normalization.

use chrono::{NaiveDateTime, TimeDelta};
use std::collections::BTreeMap;

/// One confirmed warehouse task, with typed values alongside the raw text
/// of each resolved field (the raw text is still needed for break snapshots
/// and the hourly fallback).
#[derive(Debug, Clone)]
pub struct WorkRecord {
    pub approver: String,
    pub task: String,

    pub confirm_raw: String,
    pub start_raw: Option<String>,
    pub end_raw: Option<String>,
    pub event_raw: Option<String>,

    pub weight_kg: f64,
    pub qty: f64,
    pub confirm_td: TimeDelta,
    pub start_dt: Option<NaiveDateTime>,
    pub end_dt: Option<NaiveDateTime>,
    pub event_dt: Option<NaiveDateTime>,
}

impl WorkRecord {
    /// The timestamp a record contributes to the break engine:
    /// event time first, then end time, then start time.
    pub fn primary_dt(&self) -> Option<NaiveDateTime> {
        self.event_dt.or(self.end_dt).or(self.start_dt)
    }

    /// Flatten the record into a string field map, used for the
    /// before/after snapshots attached to break events.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("approver".to_string(), self.approver.clone());
        map.insert("task".to_string(), self.task.clone());
        map.insert("weight".to_string(), format!("{}", self.weight_kg));
        map.insert("qty".to_string(), format!("{}", self.qty));
        map.insert("confirm_time".to_string(), self.confirm_raw.clone());
        if let Some(v) = &self.start_raw {
            map.insert("start_time".to_string(), v.clone());
        }
        if let Some(v) = &self.end_raw {
            map.insert("end_time".to_string(), v.clone());
        }
        if let Some(v) = &self.event_raw {
            map.insert("event_time".to_string(), v.clone());
        }
        if let Some(dt) = self.primary_dt() {
            map.insert(
                "timestamp".to_string(),
                dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            );
        }
        map
    }
}
