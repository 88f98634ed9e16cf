//! CSV ingest.
//!
//! Turns a two-column `name,score` CSV into a `RecordSet`.
//!
//! - **Header detection** is a heuristic: the first row is skipped when its
//!   second field does not parse as a number. A header whose second field looks
//!   numeric is read as data.
//! - **Row-level validation**: malformed rows are skipped and recorded, never
//!   fatal.
//! - Only a missing or unreadable file is an error.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use thiserror::Error;

use crate::domain::RecordSet;
use crate::error::AppError;

/// Why a row was left out of the Record Set.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    TooFewColumns,
    EmptyName,
    InvalidScore(String),
    /// The CSV layer could not decode the row (e.g. invalid UTF-8).
    Malformed(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::TooFewColumns => write!(f, "fewer than two columns"),
            SkipReason::EmptyName => write!(f, "empty name"),
            SkipReason::InvalidScore(raw) => write!(f, "score '{raw}' is not a finite number"),
            SkipReason::Malformed(msg) => write!(f, "malformed row: {msg}"),
        }
    }
}

/// Result of parsing one row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Parsed { name: String, score: f64 },
    Skip(SkipReason),
}

/// A skipped row and its 1-based line number in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: SkipReason,
}

/// Ingest output: records plus a report of what was read and dropped.
#[derive(Debug, Clone, Default)]
pub struct IngestedRecords {
    pub records: RecordSet,
    pub rows_read: usize,
    pub header_skipped: bool,
    pub skipped: Vec<SkippedRow>,
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("Error reading CSV '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<IngestError> for AppError {
    fn from(err: IngestError) -> Self {
        AppError::new(2, err.to_string())
    }
}

/// Load a Record Set from a CSV file.
pub fn load_records_csv(path: &Path) -> Result<IngestedRecords, IngestError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => IngestError::NotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let ingested = read_records(file).map_err(|source| IngestError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        rows_read = ingested.rows_read,
        rows_used = ingested.records.len(),
        rows_skipped = ingested.skipped.len(),
        "loaded records"
    );

    Ok(ingested)
}

/// Read records from any CSV source. Only underlying I/O failures are errors.
pub fn read_records<R: Read>(source: R) -> Result<IngestedRecords, io::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut out = IngestedRecords::default();

    for (idx, result) in reader.records().enumerate() {
        out.rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) if e.is_io_error() => return Err(io::Error::other(e)),
            Err(e) => {
                let line = e.position().map_or(idx + 1, |p| p.line() as usize);
                skip(&mut out, line, SkipReason::Malformed(e.to_string()));
                continue;
            }
        };
        let line = record.position().map_or(idx + 1, |p| p.line() as usize);

        if idx == 0 && looks_like_header(&record) {
            tracing::debug!(line, "skipping header row");
            out.header_skipped = true;
            continue;
        }

        match parse_row(&record) {
            RowOutcome::Parsed { name, score } => out.records.insert(name, score),
            RowOutcome::Skip(reason) => skip(&mut out, line, reason),
        }
    }

    Ok(out)
}

/// Parse a single `name,score` row. Extra columns are ignored.
pub fn parse_row(record: &StringRecord) -> RowOutcome {
    if record.len() < 2 {
        return RowOutcome::Skip(SkipReason::TooFewColumns);
    }

    let name = strip_bom(record.get(0).unwrap_or("")).trim();
    if name.is_empty() {
        return RowOutcome::Skip(SkipReason::EmptyName);
    }

    let raw = record.get(1).unwrap_or("").trim();
    match parse_score(raw) {
        Some(score) => RowOutcome::Parsed {
            name: name.to_string(),
            score,
        },
        None => RowOutcome::Skip(SkipReason::InvalidScore(raw.to_string())),
    }
}

/// Parse a score, accepting only finite numbers.
pub fn parse_score(s: &str) -> Option<f64> {
    let v = s.trim().parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

/// The first row is a header when its second field is missing or not numeric.
fn looks_like_header(record: &StringRecord) -> bool {
    match record.get(1) {
        Some(field) => field.trim().parse::<f64>().is_err(),
        None => true,
    }
}

fn skip(out: &mut IngestedRecords, line: usize, reason: SkipReason) {
    tracing::debug!(line, %reason, "skipping row");
    out.skipped.push(SkippedRow { line, reason });
}

fn strip_bom(s: &str) -> &str {
    // Spreadsheet exports often prefix the first field with a UTF-8 BOM.
    s.trim_start_matches('\u{feff}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> IngestedRecords {
        read_records(text.as_bytes()).unwrap()
    }

    #[test]
    fn header_row_is_detected_and_skipped() {
        let out = read("Name,Marks\nAlice,78\nBob,92\n");
        assert!(out.header_skipped);
        assert_eq!(out.records.len(), 2);
        assert_eq!(out.records.get("Bob"), Some(92.0));
        assert!(out.skipped.is_empty());
    }

    #[test]
    fn numeric_first_row_is_data() {
        let out = read("Alice,78\nBob,92\n");
        assert!(!out.header_skipped);
        assert_eq!(out.records.len(), 2);
    }

    #[test]
    fn malformed_rows_are_skipped_not_fatal() {
        let out = read("name,score\nAlice,78\nBob,abc\n,50\nSolo\nCara, 61.5 \n");
        assert_eq!(out.records.names().collect::<Vec<_>>(), vec!["Alice", "Cara"]);
        assert_eq!(out.records.get("Cara"), Some(61.5));

        let reasons: Vec<&SkipReason> = out.skipped.iter().map(|s| &s.reason).collect();
        assert_eq!(
            reasons,
            vec![
                &SkipReason::InvalidScore("abc".to_string()),
                &SkipReason::EmptyName,
                &SkipReason::TooFewColumns,
            ]
        );
        assert_eq!(out.skipped[0].line, 3);
    }

    #[test]
    fn non_finite_scores_are_rejected() {
        let out = read("a,10\nb,inf\nc,NaN\n");
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.skipped.len(), 2);
    }

    #[test]
    fn duplicate_names_keep_last_score() {
        let out = read("a,10\nb,20\na,30\n");
        assert_eq!(out.records.get("a"), Some(30.0));
        assert_eq!(out.records.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn bom_is_stripped_from_first_name() {
        let out = read("\u{feff}Alice,78\n");
        assert_eq!(out.records.get("Alice"), Some(78.0));
    }

    #[test]
    fn empty_input_yields_empty_records() {
        let out = read("");
        assert_eq!(out.rows_read, 0);
        assert!(out.records.is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_records_csv(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, IngestError::NotFound { .. }));
        assert!(err.to_string().starts_with("File not found"));
    }

    #[test]
    fn directory_is_unreadable_not_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records_csv(dir.path()).unwrap_err();
        assert!(matches!(err, IngestError::Unreadable { .. }));
        assert!(err.to_string().starts_with("Error reading CSV"));
    }

    #[test]
    fn single_column_first_row_is_a_header() {
        let out = read("Roster\nAlice,78\n");
        assert!(out.header_skipped);
        assert!(out.skipped.is_empty());
        assert_eq!(out.records.names().collect::<Vec<_>>(), vec!["Alice"]);
    }

    #[test]
    fn parse_row_ignores_extra_columns() {
        let record = StringRecord::from(vec!["Dan", "71", "extra"]);
        assert_eq!(
            parse_row(&record),
            RowOutcome::Parsed {
                name: "Dan".to_string(),
                score: 71.0
            }
        );
    }
}
