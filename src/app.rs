//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and loads settings
//! - installs logging
//! - dispatches to the interactive session, the one-shot reports, or the TUI

use std::io;

use clap::Parser;

use crate::cli::{AnalyzeArgs, Cli, Command, OutputArgs};
use crate::config::Settings;
use crate::domain::RecordSet;
use crate::error::AppError;
use crate::session::Session;

pub mod pipeline;

/// Entry point for the `gradebook` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let settings = Settings::from_env();
    crate::logging::init();

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => handle_menu(settings),
        Command::Analyze(args) => handle_analyze(&args),
        Command::Sample(args) => handle_report(&crate::data::sample_records(), &args),
        Command::Tui(args) => crate::tui::run(&args, settings),
    }
}

fn handle_menu(settings: Settings) -> Result<(), AppError> {
    let mut session = Session::new(io::stdin().lock(), io::stdout(), settings);
    session.run()
}

fn handle_analyze(args: &AnalyzeArgs) -> Result<(), AppError> {
    let ingested = crate::io::ingest::load_records_csv(&args.file)?;
    if !args.output.json {
        eprint!("{}", crate::report::format_load_report(&ingested));
    }
    handle_report(&ingested.records, &args.output)
}

fn handle_report(records: &RecordSet, output: &OutputArgs) -> Result<(), AppError> {
    let Some(analysis) = pipeline::run_analysis(records) else {
        println!("{}", crate::report::NO_DATA_MESSAGE);
        return Ok(());
    };

    if output.json {
        println!("{}", crate::report::format_json(&analysis)?);
    } else {
        println!("{}", crate::report::format_summary(&analysis));
        print!("{}", crate::report::format_table(&analysis.grades));
    }

    if let Some(path) = &output.export {
        crate::io::export::write_results_csv(path, &analysis.grades)?;
        if !output.json {
            println!("Exported results to {}", path.display());
        }
    }

    Ok(())
}
