//! Result reporting for the Credit Line Engine.
//!
//! Results are rendered two ways: a pretty-printed JSON listing for standard
//! output and a fixed-width text table persisted to a results file.

mod table;

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::Recommendation;

pub use table::{TABLE_HEADER, render_table};

/// Default file name of the persisted results table.
pub const RESULTS_FILE: &str = "resultados.txt";

/// Renders the results as a pretty-printed JSON array.
pub fn render_listing(results: &[Recommendation]) -> EngineResult<String> {
    serde_json::to_string_pretty(results).map_err(|e| EngineError::ReportWriteError {
        path: "<stdout>".to_string(),
        message: e.to_string(),
    })
}

/// Writes the results table to `path`, replacing any existing file.
pub fn write_report<P: AsRef<Path>>(path: P, results: &[Recommendation]) -> EngineResult<()> {
    let path = path.as_ref();
    fs::write(path, render_table(results)).map_err(|e| EngineError::ReportWriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    info!(path = %path.display(), rows = results.len(), "Results table written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn sample() -> Vec<Recommendation> {
        vec![Recommendation {
            payroll_type: "C".to_string(),
            first_employment_date: NaiveDate::from_ymd_opt(2019, 9, 30).unwrap(),
            gender: Gender::Male,
            tenure_months: 60,
            min_amount: Decimal::new(6000, 0),
            max_amount: Decimal::new(12000, 0),
            recommended_line: Decimal::new(610500, 2),
        }]
    }

    #[test]
    fn test_listing_is_json_array() {
        let listing = render_listing(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&listing).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["tipoNomina"], "C");
        assert_eq!(value[0]["recomendacionLinea"], "6105.00");
    }

    #[test]
    fn test_write_report_persists_table() {
        let path = std::env::temp_dir().join(format!(
            "credit-line-report-{}.txt",
            std::process::id()
        ));

        write_report(&path, &sample()).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(written, render_table(&sample()));
    }

    #[test]
    fn test_write_report_to_missing_directory_fails() {
        let result = write_report("/nonexistent/dir/resultados.txt", &sample());
        assert!(matches!(result, Err(EngineError::ReportWriteError { .. })));
    }
}
