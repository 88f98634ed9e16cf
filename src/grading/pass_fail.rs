//! Pass/fail split at the fixed [`PASS_THRESHOLD`].

use crate::domain::{PASS_THRESHOLD, PassFail, RecordSet};

/// Whether a single score passes (`>= PASS_THRESHOLD`).
pub fn passes(score: f64) -> bool {
    score >= PASS_THRESHOLD
}

/// Split names into passed and failed, each in Record Set order.
pub fn partition(records: &RecordSet) -> PassFail {
    let mut out = PassFail::default();
    for r in records {
        if passes(r.score) {
            out.passed.push(r.name.clone());
        } else {
            out.failed.push(r.name.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        let records: RecordSet = [("edge", 40.0), ("below", 39.999)].into_iter().collect();
        let split = partition(&records);
        assert_eq!(split.passed, vec!["edge".to_string()]);
        assert_eq!(split.failed, vec!["below".to_string()]);
    }

    #[test]
    fn every_name_lands_in_exactly_one_side() {
        let records: RecordSet = [("a", 0.0), ("b", 100.0), ("c", 41.0), ("d", -2.0), ("e", 40.0)]
            .into_iter()
            .collect();
        let split = partition(&records);

        assert_eq!(split.passed.len() + split.failed.len(), records.len());
        for name in records.names() {
            let in_passed = split.passed.iter().any(|n| n == name);
            let in_failed = split.failed.iter().any(|n| n == name);
            assert!(in_passed ^ in_failed, "{name} must be in exactly one list");
        }
        assert_eq!(split.passed, vec!["b", "c", "e"]);
        assert_eq!(split.failed, vec!["a", "d"]);
    }

    #[test]
    fn empty_set_partitions_to_two_empty_lists() {
        assert_eq!(partition(&RecordSet::new()), PassFail::default());
    }
}
