//! Built-in demonstration dataset.

use crate::domain::RecordSet;

/// Six students spanning every grade, with one failing score.
pub const SAMPLE_STUDENTS: [(&str, f64); 6] = [
    ("Alice", 78.0),
    ("Bob", 92.0),
    ("Charlie", 65.0),
    ("Deepa", 55.0),
    ("Esha", 34.0),
    ("Faiz", 88.0),
];

pub fn sample_records() -> RecordSet {
    SAMPLE_STUDENTS.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_six_students_in_order() {
        let records = sample_records();
        assert_eq!(records.len(), 6);
        assert_eq!(
            records.names().collect::<Vec<_>>(),
            vec!["Alice", "Bob", "Charlie", "Deepa", "Esha", "Faiz"]
        );
    }
}
