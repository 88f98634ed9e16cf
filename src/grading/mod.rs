//! Grading engine.
//!
//! - score → letter grade and the grade histogram (`scale`)
//! - pass/fail partition (`pass_fail`)

pub mod pass_fail;
pub mod scale;

pub use pass_fail::*;
pub use scale::*;
