//! Shared domain types.
//!
//! These types are kept small and serializable so they can be:
//!
//! - passed between the statistics/grading engines and the front-ends
//! - exported to CSV/JSON
//! - rendered by both the text report and the TUI

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Scores at or above this value pass.
pub const PASS_THRESHOLD: f64 = 40.0;

/// Letter grade derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// All grades, best first. Used for stable report ordering.
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One student's name and score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    pub name: String,
    pub score: f64,
}

/// Ordered name → score mapping under analysis.
///
/// Names are unique. Writing an existing name replaces its score in place, so
/// iteration order follows the first write of each name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<StudentRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, score: f64) {
        let name = name.into();
        match self.records.iter_mut().find(|r| r.name == name) {
            Some(existing) => existing.score = score,
            None => self.records.push(StudentRecord { name, score }),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.records.iter().find(|r| r.name == name).map(|r| r.score)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.records.iter()
    }

    pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.score)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.name.as_str())
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a StudentRecord;
    type IntoIter = std::slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for RecordSet {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut set = RecordSet::new();
        for (name, score) in iter {
            set.insert(name, score);
        }
        set
    }
}

/// An extreme score and every name that reached it (Record Set order).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extreme {
    pub value: f64,
    pub names: Vec<String>,
}

/// Descriptive statistics over a Record Set. Every field but `count` is
/// absent for an empty set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub max: Option<Extreme>,
    pub min: Option<Extreme>,
}

/// A record together with its derived grade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradedRecord {
    pub name: String,
    pub score: f64,
    pub grade: Grade,
}

/// Count of students per grade. All five grades are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GradeDistribution {
    counts: BTreeMap<Grade, usize>,
}

impl GradeDistribution {
    pub fn new() -> Self {
        Self {
            counts: Grade::ALL.iter().map(|&g| (g, 0)).collect(),
        }
    }

    pub fn record(&mut self, grade: Grade) {
        *self.counts.entry(grade).or_insert(0) += 1;
    }

    pub fn get(&self, grade: Grade) -> usize {
        self.counts.get(&grade).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(grade, count)` pairs, A through F.
    pub fn iter(&self) -> impl Iterator<Item = (Grade, usize)> + '_ {
        self.counts.iter().map(|(g, c)| (*g, *c))
    }
}

impl Default for GradeDistribution {
    fn default() -> Self {
        Self::new()
    }
}

/// Names split by [`PASS_THRESHOLD`], each list in Record Set order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassFail {
    pub passed: Vec<String>,
    pub failed: Vec<String>,
}
