//! Rate table and applicant list loading.
//!
//! This module provides the [`ConfigLoader`] type for loading the per-gender
//! rate tables and the applicant list from JSON files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::Applicant;

use super::types::{RateTable, RateTables};

/// File name of the male rate table inside the data directory.
pub const MALE_TABLE_FILE: &str = "creditoMasculino.json";
/// File name of the female rate table inside the data directory.
pub const FEMALE_TABLE_FILE: &str = "creditoFemenino.json";
/// File name of the applicant list inside the data directory.
pub const APPLICANTS_FILE: &str = "ejemplo.json";

/// Loads and provides access to the rate tables.
///
/// # Directory Structure
///
/// ```text
/// data/
/// ├── creditoMasculino.json  # Male rate table
/// ├── creditoFemenino.json   # Female rate table
/// └── ejemplo.json           # Applicant list
/// ```
///
/// # Example
///
/// ```no_run
/// use credit_line_engine::config::ConfigLoader;
/// use credit_line_engine::models::Gender;
///
/// let loader = ConfigLoader::load("./data")?;
/// let table = loader.tables().for_gender(Gender::Female);
/// println!("Payroll types: {}", table.payroll_type_count());
/// # Ok::<(), credit_line_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tables: RateTables,
}

impl ConfigLoader {
    /// Loads both rate tables from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Either table file is missing (`ConfigNotFound`)
    /// - Either file is not a valid rate table (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let male = Self::load_json::<RateTable>(&path.join(MALE_TABLE_FILE))?;
        let female = Self::load_json::<RateTable>(&path.join(FEMALE_TABLE_FILE))?;

        info!(
            path = %path.display(),
            male_payroll_types = male.payroll_type_count(),
            female_payroll_types = female.payroll_type_count(),
            "Rate tables loaded"
        );

        Ok(Self {
            tables: RateTables::new(male, female),
        })
    }

    /// Loads the ordered applicant list from a JSON file.
    pub fn load_applicants<P: AsRef<Path>>(path: P) -> EngineResult<Vec<Applicant>> {
        let applicants = Self::load_json::<Vec<Applicant>>(path.as_ref())?;
        info!(
            path = %path.as_ref().display(),
            count = applicants.len(),
            "Applicants loaded"
        );
        Ok(applicants)
    }

    /// Loads and parses a JSON file.
    fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rate tables.
    pub fn tables(&self) -> &RateTables {
        &self.tables
    }

    /// Consumes the loader and returns the rate tables.
    pub fn into_tables(self) -> RateTables {
        self.tables
    }
}
