//! Recommendation result model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Gender;

/// The computed credit line recommendation for one applicant.
///
/// Serialized with the same keys as the applicant list so a result reads
/// as the applicant record augmented with the computed amounts.
///
/// # Example
///
/// ```
/// use credit_line_engine::models::{Gender, Recommendation};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let recommendation = Recommendation {
///     payroll_type: "A".to_string(),
///     first_employment_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     gender: Gender::Male,
///     tenure_months: 40,
///     min_amount: Decimal::new(10000, 0),
///     max_amount: Decimal::new(40000, 0),
///     recommended_line: Decimal::new(1052500, 2),
/// };
/// assert_eq!(recommendation.spread(), Decimal::new(30000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The payroll type key.
    #[serde(rename = "tipoNomina")]
    pub payroll_type: String,
    /// The date of first employment.
    #[serde(rename = "fechaPrimerEmpleo")]
    pub first_employment_date: NaiveDate,
    /// The validated gender.
    #[serde(rename = "genero")]
    pub gender: Gender,
    /// Whole months of tenure as of the calculation instant.
    #[serde(rename = "mesesDesdePrimerEmpleo")]
    pub tenure_months: i64,
    /// Amount taken from the minimum table.
    #[serde(rename = "montoMinimo")]
    pub min_amount: Decimal,
    /// Amount taken from the maximum table.
    #[serde(rename = "montoMaximo")]
    pub max_amount: Decimal,
    /// The recommended line, rounded to 2 decimal places.
    #[serde(rename = "recomendacionLinea")]
    pub recommended_line: Decimal,
}

impl Recommendation {
    /// Returns the spread between the maximum and minimum amounts.
    pub fn spread(&self) -> Decimal {
        self.max_amount - self.min_amount
    }
}
