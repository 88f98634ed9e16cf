use std::fs;
use std::io::Cursor;

use gradebook::app::pipeline::run_analysis;
use gradebook::config::Settings;
use gradebook::domain::Grade;
use gradebook::io::export::write_results_csv;
use gradebook::io::ingest::{SkipReason, load_records_csv};
use gradebook::session::Session;
use pretty_assertions::assert_eq;

#[test]
fn csv_ingest_analyze_export_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("marks.csv");
    fs::write(
        &input,
        "Name,Marks\nAlice,78\nBob,92\nCharlie,65\nDeepa,55\nEsha,34\nFaiz,88\nGhost,absent\n",
    )
    .unwrap();

    let ingested = load_records_csv(&input).unwrap();
    assert!(ingested.header_skipped);
    assert_eq!(ingested.records.len(), 6);
    assert_eq!(ingested.skipped.len(), 1);
    assert_eq!(ingested.skipped[0].reason, SkipReason::InvalidScore("absent".to_string()));

    let analysis = run_analysis(&ingested.records).unwrap();
    assert_eq!(analysis.statistics.median, Some(71.5));
    assert_eq!(analysis.distribution.get(Grade::F), 2);
    assert_eq!(analysis.pass_fail.failed, vec!["Esha"]);

    let output = dir.path().join("results.csv");
    write_results_csv(&output, &analysis.grades).unwrap();
    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "Name,Marks,Grade\nAlice,78,C\nBob,92,A\nCharlie,65,D\nDeepa,55,F\nEsha,34,F\nFaiz,88,B\n"
    );

    // The export's Marks column reads back as the original scores.
    let reloaded = load_records_csv(&output).unwrap();
    assert!(reloaded.header_skipped);
    assert_eq!(reloaded.records, ingested.records);
}

#[test]
fn fractional_scores_survive_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("marks.csv");
    fs::write(&input, "Ana,89.999\nBen,40\nCy,39.999\nDee,-5\n").unwrap();

    let ingested = load_records_csv(&input).unwrap();
    let analysis = run_analysis(&ingested.records).unwrap();
    let grades: Vec<Grade> = analysis.grades.iter().map(|g| g.grade).collect();
    assert_eq!(grades, vec![Grade::B, Grade::F, Grade::F, Grade::F]);
    assert_eq!(analysis.pass_fail.passed, vec!["Ana", "Ben"]);
    assert_eq!(analysis.pass_fail.failed, vec!["Cy", "Dee"]);

    let output = dir.path().join("out.csv");
    write_results_csv(&output, &analysis.grades).unwrap();
    let reloaded = load_records_csv(&output).unwrap();
    assert_eq!(reloaded.records, ingested.records);
}

#[test]
fn interactive_manual_entry_session() {
    let script = "1\nAlice\n95\n\nBob\nninety\nBob\n40\ndone\nn\n4\n";
    let mut session = Session::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), Settings::default());
    session.run().unwrap();

    assert_eq!(session.records().len(), 2);
    let out = String::from_utf8(session.into_output()).unwrap();
    assert!(out.contains("Name cannot be empty."));
    assert!(out.contains("Please enter a valid number for marks."));
    assert!(out.contains("Total students: 2"));
    assert!(out.contains("Max score: 95  (Students: Alice)"));
    assert!(out.contains("Passed (>=40): 2"));
    assert!(out.contains("Exiting. Bye!"));
}

#[test]
fn empty_csv_reports_no_data() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.csv");
    fs::write(&input, "").unwrap();

    let script = format!("2\n{}\n4\n", input.display());
    let mut session = Session::new(Cursor::new(script.into_bytes()), Vec::new(), Settings::default());
    session.run().unwrap();

    let out = String::from_utf8(session.into_output()).unwrap();
    assert!(out.contains("CSV is empty."));
    assert!(out.contains("No student data provided. Nothing to analyze."));
}
