//! Interactive menu session.
//!
//! `Session` owns everything a run needs (I/O handles, settings, the current
//! Record Set) and a small dispatch loop drives it:
//!
//! - `1` manual entry
//! - `2` load a CSV file
//! - `3` load the built-in sample
//! - `4` / `exit` / `quit` leave
//!
//! Input and output are generic so the whole session can be scripted in tests.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::app::pipeline::{Analysis, run_analysis};
use crate::config::Settings;
use crate::data::sample_records;
use crate::domain::RecordSet;
use crate::error::AppError;
use crate::io::export::write_results_csv;
use crate::io::ingest::{load_records_csv, parse_score};
use crate::report::{NO_DATA_MESSAGE, format_summary, format_table};

const DONE_TOKEN: &str = "done";

const MENU: &str = "
======== GradeBook Analyzer ========
1) Manual entry (type in names & marks)
2) Load from CSV file (path)
3) Load sample data (built-in, 6 students)
4) Exit
";

/// A top-level menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ManualEntry,
    LoadCsv,
    LoadSample,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        match input {
            "1" => Some(Self::ManualEntry),
            "2" => Some(Self::LoadCsv),
            "3" => Some(Self::LoadSample),
            "4" => Some(Self::Exit),
            _ if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") => {
                Some(Self::Exit)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    settings: Settings,
    records: RecordSet,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            settings,
            records: RecordSet::new(),
        }
    }

    /// The Record Set of the most recent analysis run.
    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.say("Welcome to GradeBook Analyzer!")?;
        loop {
            self.write(MENU)?;
            let Some(line) = self.prompt("Choose an option (1-4): ")? else {
                self.say("\nInput closed. Bye!")?;
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                self.say("Invalid choice. Please enter 1, 2, 3, or 4.")?;
                continue;
            };

            tracing::debug!(?choice, "menu choice");
            if self.dispatch(choice)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow, AppError> {
        match choice {
            MenuChoice::ManualEntry => {
                self.records = self.manual_entry()?;
            }
            MenuChoice::LoadCsv => {
                let path = self.prompt("Enter CSV file path: ")?.unwrap_or_default();
                self.records = self.load_csv(PathBuf::from(path))?;
            }
            MenuChoice::LoadSample => {
                self.records = sample_records();
                self.say(&format!("Loaded sample data ({} students).", self.records.len()))?;
            }
            MenuChoice::Exit => {
                self.say("Exiting. Bye!")?;
                return Ok(Flow::Exit);
            }
        }

        self.analyze_current()?;
        Ok(Flow::Continue)
    }

    /// Prompt for name/score pairs until `done` (or end of input).
    ///
    /// Empty names and non-numeric scores are rejected with a message and the
    /// prompt is repeated.
    pub fn manual_entry(&mut self) -> Result<RecordSet, AppError> {
        self.say("\nManual entry mode. Enter student data. Type DONE to finish.")?;
        let mut records = RecordSet::new();

        loop {
            let Some(name) = self.prompt("Student name (or DONE): ")? else {
                break;
            };
            if name.eq_ignore_ascii_case(DONE_TOKEN) {
                break;
            }
            if name.is_empty() {
                self.say("Name cannot be empty.")?;
                continue;
            }

            let Some(raw) = self.prompt(&format!("Marks for {name}: "))? else {
                break;
            };
            if raw.eq_ignore_ascii_case(DONE_TOKEN) {
                break;
            }
            match parse_score(&raw) {
                Some(score) => records.insert(name, score),
                None => self.say("Please enter a valid number for marks.")?,
            }
        }

        Ok(records)
    }

    /// Load a CSV. A missing or unreadable file is reported and yields an
    /// empty Record Set.
    fn load_csv(&mut self, path: PathBuf) -> Result<RecordSet, AppError> {
        match load_records_csv(&path) {
            Ok(ingested) => {
                if ingested.rows_read == 0 {
                    self.say("CSV is empty.")?;
                }
                Ok(ingested.records)
            }
            Err(err) => {
                tracing::warn!(error = %err, "csv load failed");
                self.say(&err.to_string())?;
                Ok(RecordSet::new())
            }
        }
    }

    /// Analyze the current Record Set, print the report, then offer export.
    pub fn analyze_current(&mut self) -> Result<Option<Analysis>, AppError> {
        let Some(analysis) = run_analysis(&self.records) else {
            self.say(NO_DATA_MESSAGE)?;
            return Ok(None);
        };

        let report = format!("\n{}\n{}", format_summary(&analysis), format_table(&analysis.grades));
        self.say(&report)?;
        self.offer_export(&analysis)?;
        Ok(Some(analysis))
    }

    fn offer_export(&mut self, analysis: &Analysis) -> Result<(), AppError> {
        loop {
            let Some(answer) = self.prompt("Do you want to export the results table to CSV? (y/n): ")? else {
                return Ok(());
            };
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => break,
                "n" | "no" => return Ok(()),
                _ => self.say("Please enter y or n.")?,
            }
        }

        let default = self.settings.export_path.display().to_string();
        let path = match self.prompt(&format!("Enter output CSV filename (e.g. {default}): "))? {
            Some(p) if !p.is_empty() => PathBuf::from(p),
            _ => self.settings.export_path.clone(),
        };

        match write_results_csv(&path, &analysis.grades) {
            Ok(()) => self.say(&format!("Exported results to {}", path.display())),
            Err(err) => self.say(&err.to_string()),
        }
    }

    /// Print `message` and read one trimmed line. `None` means input ended.
    fn prompt(&mut self, message: &str) -> Result<Option<String>, AppError> {
        self.write(message)?;
        self.output
            .flush()
            .map_err(|e| AppError::new(4, format!("Failed to write prompt: {e}")))?;

        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .map_err(|e| AppError::new(4, format!("Failed to read input: {e}")))?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, message: &str) -> Result<(), AppError> {
        writeln!(self.output, "{message}")
            .map_err(|e| AppError::new(4, format!("Failed to write output: {e}")))
    }

    fn write(&mut self, text: &str) -> Result<(), AppError> {
        write!(self.output, "{text}").map_err(|e| AppError::new(4, format!("Failed to write output: {e}")))
    }
}
