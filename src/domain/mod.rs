//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the input artifact (`RecordSet`, `StudentRecord`)
//! - grading outputs (`Grade`, `GradedRecord`, `GradeDistribution`, `PassFail`)
//! - aggregate statistics (`Statistics`, `Extreme`)

pub mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_name_overwrites_in_place() {
        let mut set = RecordSet::new();
        set.insert("Alice", 50.0);
        set.insert("Bob", 60.0);
        set.insert("Alice", 70.0);

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("Alice"), Some(70.0));
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn distribution_starts_with_all_grades_at_zero() {
        let dist = GradeDistribution::new();
        let grades: Vec<Grade> = dist.iter().map(|(g, _)| g).collect();
        assert_eq!(grades, Grade::ALL.to_vec());
        assert_eq!(dist.total(), 0);
    }

    #[test]
    fn distribution_serializes_as_letter_map() {
        let mut dist = GradeDistribution::new();
        dist.record(Grade::B);
        let json = serde_json::to_string(&dist).unwrap();
        assert_eq!(json, r#"{"A":0,"B":1,"C":0,"D":0,"F":0}"#);
    }
}
