//! `gradebook` library crate.
//!
//! The binary (`gradebook`) is a thin wrapper around this library so that:
//!
//! - the statistics and grading engines are testable without spawning processes
//! - the interactive session can be scripted with in-memory readers/writers
//! - the CLI, menu, and TUI front-ends share one analysis pipeline

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod grading;
pub mod io;
pub mod logging;
pub mod report;
pub mod session;
pub mod stats;
pub mod tui;
