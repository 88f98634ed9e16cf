//! Reporting utilities: text summary, results table, and JSON output.

pub mod format;

pub use format::*;

use crate::app::pipeline::Analysis;
use crate::error::AppError;

/// Serialize an analysis as pretty JSON.
pub fn format_json(analysis: &Analysis) -> Result<String, AppError> {
    serde_json::to_string_pretty(analysis)
        .map_err(|e| AppError::new(4, format!("Failed to serialize analysis: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_analysis;
    use crate::data::sample_records;

    #[test]
    fn json_contains_statistics_and_distribution() {
        let analysis = run_analysis(&sample_records()).unwrap();
        let json = format_json(&analysis).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["statistics"]["count"], 6);
        assert_eq!(value["statistics"]["median"], 71.5);
        assert_eq!(value["statistics"]["max"]["names"][0], "Bob");
        assert_eq!(value["distribution"]["F"], 2);
        assert_eq!(value["grades"][1]["grade"], "A");
        assert_eq!(value["pass_fail"]["failed"][0], "Esha");
    }
}
