//! Formatted terminal output: analysis summary and the results table.
//!
//! Formatting lives here so the engines stay free of presentation concerns
//! and output changes stay localized.

use crate::app::pipeline::Analysis;
use crate::domain::{Extreme, GradedRecord, PASS_THRESHOLD};
use crate::io::export::fmt_marks_exact;
use crate::io::ingest::IngestedRecords;

const MARKS_WIDTH: usize = 6;
const GRADE_WIDTH: usize = 5;

pub const NO_DATA_MESSAGE: &str = "No student data provided. Nothing to analyze.";

/// Format the statistics, grade distribution, and pass/fail lists.
pub fn format_summary(analysis: &Analysis) -> String {
    let stats = &analysis.statistics;
    let mut out = String::new();

    out.push_str("--- Analysis Summary ---\n");
    out.push_str(&format!("Total students: {}\n", stats.count));
    out.push_str(&match stats.mean {
        Some(v) => format!("Average (mean): {v:.2}\n"),
        None => "Average: N/A\n".to_string(),
    });
    out.push_str(&match stats.median {
        Some(v) => format!("Median: {v:.2}\n"),
        None => "Median: N/A\n".to_string(),
    });
    if let Some(max) = &stats.max {
        out.push_str(&format_extreme("Max", max));
    }
    if let Some(min) = &stats.min {
        out.push_str(&format_extreme("Min", min));
    }

    out.push_str("\nGrade distribution:\n");
    for (grade, count) in analysis.distribution.iter() {
        out.push_str(&format!("  {grade}: {count}\n"));
    }

    let threshold = fmt_marks_exact(PASS_THRESHOLD);
    let pf = &analysis.pass_fail;
    out.push_str(&format!("\nPassed (>={threshold}): {}\n", pf.passed.len()));
    if !pf.passed.is_empty() {
        out.push_str(&format!("  {}\n", pf.passed.join(", ")));
    }
    out.push_str(&format!("Failed (<{threshold}): {}\n", pf.failed.len()));
    if !pf.failed.is_empty() {
        out.push_str(&format!("  {}\n", pf.failed.join(", ")));
    }

    out
}

/// Format the three-column `Name / Marks / Grade` table.
pub fn format_table(rows: &[GradedRecord]) -> String {
    if rows.is_empty() {
        return "No data to show.\n".to_string();
    }

    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());
    let rule = "-".repeat(name_width + MARKS_WIDTH + GRADE_WIDTH + 8);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_width$}  {:>MARKS_WIDTH$}  {:^GRADE_WIDTH$}\n",
        "Name", "Marks", "Grade"
    ));
    out.push_str(&rule);
    out.push('\n');

    for r in rows {
        out.push_str(&format!(
            "{:<name_width$}  {:>MARKS_WIDTH$}  {:^GRADE_WIDTH$}\n",
            r.name,
            fmt_marks(r.score),
            r.grade.as_str()
        ));
    }
    out.push_str(&rule);
    out.push('\n');

    out
}

/// Two decimals with trailing zeros and a dangling dot removed.
pub fn fmt_marks(score: f64) -> String {
    let s = format!("{score:.2}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Summarize what a CSV load kept and dropped.
pub fn format_load_report(ingested: &IngestedRecords) -> String {
    let mut out = format!(
        "Rows: read={} used={} skipped={}{}\n",
        ingested.rows_read,
        ingested.records.len(),
        ingested.skipped.len(),
        if ingested.header_skipped { " (header row skipped)" } else { "" },
    );
    for row in &ingested.skipped {
        out.push_str(&format!("  line {}: {}\n", row.line, row.reason));
    }
    out
}

fn format_extreme(label: &str, extreme: &Extreme) -> String {
    format!(
        "{label} score: {}  (Students: {})\n",
        fmt_marks_exact(extreme.value),
        extreme.names.join(", ")
    )
}
