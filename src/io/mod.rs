//! Input/output helpers.
//!
//! - CSV ingest + row validation (`ingest`)
//! - graded results export (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
