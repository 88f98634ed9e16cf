//! Descriptive statistics over a Record Set.
//!
//! All functions are pure and return `None` for an empty set. Values are
//! never rounded here; rounding belongs to the report layer.

use crate::domain::{Extreme, RecordSet, Statistics};

/// Arithmetic mean of all scores.
pub fn mean(records: &RecordSet) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let sum: f64 = records.scores().sum();
    Some(sum / records.len() as f64)
}

/// Median by ascending score; the two middle values are averaged for an even count.
pub fn median(records: &RecordSet) -> Option<f64> {
    let mut sorted: Vec<f64> = records.scores().collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Highest score and every name that holds it.
pub fn max(records: &RecordSet) -> Option<Extreme> {
    let value = records.scores().reduce(f64::max)?;
    Some(extreme_at(records, value))
}

/// Lowest score and every name that holds it.
pub fn min(records: &RecordSet) -> Option<Extreme> {
    let value = records.scores().reduce(f64::min)?;
    Some(extreme_at(records, value))
}

/// Compute all statistics in one pass over the engine functions.
pub fn summarize(records: &RecordSet) -> Statistics {
    Statistics {
        count: records.len(),
        mean: mean(records),
        median: median(records),
        max: max(records),
        min: min(records),
    }
}

fn extreme_at(records: &RecordSet, value: f64) -> Extreme {
    let names = records
        .iter()
        .filter(|r| r.score == value)
        .map(|r| r.name.clone())
        .collect();
    Extreme { value, names }
}
