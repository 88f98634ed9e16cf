//! Statistics engine: mean, median, and extremes with tie sets.

pub mod summary;

pub use summary::*;
