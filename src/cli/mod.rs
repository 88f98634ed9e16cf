//! Command-line parsing.
//!
//! Argument parsing and command dispatch are kept apart from the engines.
//! Running `gradebook` with no subcommand starts the interactive menu.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "gradebook",
    version,
    about = "GradeBook Analyzer: score statistics, letter grades, and pass/fail"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the interactive menu (default).
    Menu,
    /// Analyze a two-column `name,score` CSV and print the report.
    Analyze(AnalyzeArgs),
    /// Analyze the built-in six-student sample.
    Sample(OutputArgs),
    /// Browse results in a terminal UI.
    Tui(TuiArgs),
}

#[derive(Debug, Args, Clone)]
pub struct AnalyzeArgs {
    /// Input CSV (`name,score`; header row optional).
    #[arg(short = 'f', long, value_name = "CSV")]
    pub file: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output options shared by the non-interactive commands.
#[derive(Debug, Args, Clone, Default)]
pub struct OutputArgs {
    /// Export `Name,Marks,Grade` rows to this CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Print the analysis as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone, Default)]
pub struct TuiArgs {
    /// CSV to load on start (the sample dataset is used when omitted).
    #[arg(short = 'f', long, value_name = "CSV")]
    pub file: Option<PathBuf>,
}
