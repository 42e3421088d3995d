//! Applicant model and related types.
//!
//! This module defines the [`Applicant`] record read from the applicant list
//! and the [`Gender`] enum that selects which rate table applies.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The applicant's gender, which selects the rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Uses the male rate table. Encoded as `"m"`.
    #[serde(rename = "m")]
    Male,
    /// Uses the female rate table. Encoded as `"f"`.
    #[serde(rename = "f")]
    Female,
}

impl Gender {
    /// Returns the single-letter code used in data files and reports.
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "m",
            Gender::Female => "f",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = EngineError;

    /// Parses a gender code.
    ///
    /// Only `"m"` and `"f"` are accepted; anything else is rejected rather
    /// than falling back to one of the tables.
    ///
    /// # Examples
    ///
    /// ```
    /// use credit_line_engine::models::Gender;
    ///
    /// assert_eq!("m".parse::<Gender>().unwrap(), Gender::Male);
    /// assert!("x".parse::<Gender>().is_err());
    /// ```
    fn from_str(s: &str) -> EngineResult<Self> {
        match s {
            "m" => Ok(Gender::Male),
            "f" => Ok(Gender::Female),
            other => Err(EngineError::InvalidGender {
                value: other.to_string(),
            }),
        }
    }
}

/// An applicant as it appears in the applicant list.
///
/// The gender is kept as the raw string so that an unrecognised value
/// surfaces as [`EngineError::InvalidGender`] for that applicant instead of
/// failing the whole file parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    /// The payroll type key (e.g., "A").
    #[serde(rename = "tipoNomina")]
    pub payroll_type: String,
    /// The date of the applicant's first employment.
    #[serde(rename = "fechaPrimerEmpleo")]
    pub first_employment_date: NaiveDate,
    /// The raw gender code.
    #[serde(rename = "genero")]
    pub gender: String,
}

impl Applicant {
    /// Validates and returns the applicant's gender.
    pub fn resolve_gender(&self) -> EngineResult<Gender> {
        self.gender.parse()
    }
}
