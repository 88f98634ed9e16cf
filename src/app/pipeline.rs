//! Shared analysis pipeline used by the interactive session, the CLI
//! subcommands, and the TUI.
//!
//! Record Set -> statistics + grades + distribution + pass/fail -> `Analysis`
//!
//! The front-ends only deal with presentation.

use serde::Serialize;

use crate::domain::{GradeDistribution, GradedRecord, PassFail, RecordSet, Statistics};
use crate::grading::{assign_grades, distribution, partition};
use crate::stats::summarize;

/// All computed outputs of a single analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub statistics: Statistics,
    pub grades: Vec<GradedRecord>,
    pub distribution: GradeDistribution,
    pub pass_fail: PassFail,
}

/// Run every engine over `records`.
///
/// Returns `None` for an empty set; callers report "no data" on that path.
pub fn run_analysis(records: &RecordSet) -> Option<Analysis> {
    if records.is_empty() {
        return None;
    }

    let statistics = summarize(records);
    let grades = assign_grades(records);
    let distribution = distribution(&grades);
    let pass_fail = partition(records);

    tracing::debug!(
        students = statistics.count,
        passed = pass_fail.passed.len(),
        failed = pass_fail.failed.len(),
        "analysis complete"
    );

    Some(Analysis {
        statistics,
        grades,
        distribution,
        pass_fail,
    })
}
