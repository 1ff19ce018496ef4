//! Parser for the "confirm time" column: a per-task duration recorded as
//! free text. Total: anything unreadable becomes a zero duration.

use chrono::TimeDelta;

/// Seconds in ten days. Bare numbers above this are taken as milliseconds:
/// some exports dump raw millisecond counters into the column.
const MS_THRESHOLD_SECS: f64 = 24.0 * 3600.0 * 10.0;

fn delta_from_secs(secs: f64) -> TimeDelta {
    if !secs.is_finite() {
        return TimeDelta::zero();
    }
    TimeDelta::milliseconds((secs * 1000.0) as i64)
}

/// Parse `H:MM:SS`, `MM:SS` or a bare number of seconds (milliseconds when
/// implausibly large). Empty or unparseable input → zero.
pub fn parse_confirm_duration(value: &str) -> TimeDelta {
    let s = value.trim();
    if s.is_empty() {
        return TimeDelta::zero();
    }

    if s.contains(':') {
        let parts: Vec<&str> = s.split(':').collect();
        let nums: Option<Vec<f64>> = parts
            .iter()
            .map(|p| p.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
            .collect();
        return match nums.as_deref() {
            Some([h, m, sec]) => delta_from_secs(h * 3600.0 + m * 60.0 + sec),
            Some([m, sec]) => delta_from_secs(m * 60.0 + sec),
            _ => TimeDelta::zero(),
        };
    }

    match s.replace(',', ".").parse::<f64>() {
        Ok(num) if num.is_finite() => {
            if num > MS_THRESHOLD_SECS {
                TimeDelta::milliseconds(num as i64)
            } else {
                delta_from_secs(num)
            }
        }
        _ => TimeDelta::zero(),
    }
}
