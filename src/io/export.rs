//! Export graded results to CSV.
//!
//! The layout is fixed: `Name,Marks,Grade`, one row per student in Record Set
//! order. Marks use the shortest decimal form that reads back to the same
//! value, so a re-import sees the original scores.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::GradedRecord;
use crate::error::AppError;

pub const EXPORT_HEADER: [&str; 3] = ["Name", "Marks", "Grade"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create export CSV '{}': {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write export CSV '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        AppError::new(2, err.to_string())
    }
}

/// Write graded results to `path`, replacing any existing file.
pub fn write_results_csv(path: &Path, graded: &[GradedRecord]) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    write_results(file, graded).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "export failed");
        ExportError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;

    tracing::info!(path = %path.display(), rows = graded.len(), "exported results");
    Ok(())
}

/// Write graded results as CSV to any writer.
pub fn write_results<W: Write>(sink: W, graded: &[GradedRecord]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(EXPORT_HEADER)?;
    for r in graded {
        let marks = fmt_marks_exact(r.score);
        writer.write_record([r.name.as_str(), marks.as_str(), r.grade.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Shortest exact form: `78.0` -> `78`, `88.25` -> `88.25`.
pub fn fmt_marks_exact(score: f64) -> String {
    score.to_string()
}
