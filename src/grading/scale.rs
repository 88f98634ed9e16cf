//! Fixed letter-grade scale.
//!
//! | Range             | Grade |
//! |-------------------|-------|
//! | >= 90             | A     |
//! | [80, 90)          | B     |
//! | [70, 80)          | C     |
//! | [60, 70)          | D     |
//! | < 60              | F     |

use crate::domain::{Grade, GradeDistribution, GradedRecord, RecordSet};

/// Lower bounds, best grade first. The first bound the score reaches wins.
const THRESHOLDS: [(f64, Grade); 4] = [
    (90.0, Grade::A),
    (80.0, Grade::B),
    (70.0, Grade::C),
    (60.0, Grade::D),
];

/// Map a score to its grade. Total over finite inputs; no upper bound.
pub fn grade_for(score: f64) -> Grade {
    THRESHOLDS
        .iter()
        .find(|(low, _)| score >= *low)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::F)
}

/// Grade every record, keeping Record Set order.
pub fn assign_grades(records: &RecordSet) -> Vec<GradedRecord> {
    records
        .iter()
        .map(|r| GradedRecord {
            name: r.name.clone(),
            score: r.score,
            grade: grade_for(r.score),
        })
        .collect()
}

/// Count grades. Grades nobody received are kept with a zero count.
pub fn distribution(graded: &[GradedRecord]) -> GradeDistribution {
    let mut dist = GradeDistribution::new();
    for r in graded {
        dist.record(r.grade);
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_boundaries_are_inclusive_below() {
        assert_eq!(grade_for(100.0), Grade::A);
        assert_eq!(grade_for(90.0), Grade::A);
        assert_eq!(grade_for(89.999), Grade::B);
        assert_eq!(grade_for(80.0), Grade::B);
        assert_eq!(grade_for(79.999), Grade::C);
        assert_eq!(grade_for(70.0), Grade::C);
        assert_eq!(grade_for(69.999), Grade::D);
        assert_eq!(grade_for(60.0), Grade::D);
        assert_eq!(grade_for(59.999), Grade::F);
        assert_eq!(grade_for(0.0), Grade::F);
        assert_eq!(grade_for(-5.0), Grade::F);
    }

    #[test]
    fn grades_just_below_a_boundary_do_not_round_up() {
        assert_eq!(grade_for(89.99995), Grade::B);
        assert_eq!(grade_for(150.0), Grade::A);
    }

    #[test]
    fn distribution_counts_sum_to_student_count() {
        let records: RecordSet = [("a", 95.0), ("b", 91.0), ("c", 10.0), ("d", 72.0)]
            .into_iter()
            .collect();
        let graded = assign_grades(&records);
        let dist = distribution(&graded);

        assert_eq!(dist.total(), records.len());
        assert_eq!(dist.get(Grade::A), 2);
        assert_eq!(dist.get(Grade::B), 0);
        assert_eq!(dist.get(Grade::C), 1);
        assert_eq!(dist.get(Grade::D), 0);
        assert_eq!(dist.get(Grade::F), 1);
    }

    #[test]
    fn assign_grades_keeps_record_order() {
        let records: RecordSet = [("z", 61.0), ("a", 81.0)].into_iter().collect();
        let graded = assign_grades(&records);
        assert_eq!(graded[0].name, "z");
        assert_eq!(graded[0].grade, Grade::D);
        assert_eq!(graded[1].name, "a");
        assert_eq!(graded[1].grade, Grade::B);
    }
}
