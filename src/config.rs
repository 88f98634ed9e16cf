//! Runtime settings resolved from the environment (and an optional `.env`).

use std::path::PathBuf;

pub const EXPORT_PATH_VAR: &str = "GRADEBOOK_EXPORT_PATH";
pub const DEFAULT_EXPORT_PATH: &str = "results.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Used when the export prompt is answered with an empty path.
    pub export_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let export_path = lookup(EXPORT_PATH_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_PATH));
        Self { export_path }
    }
}
