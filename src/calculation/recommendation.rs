//! Per-applicant recommendation and batch processing.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::config::RateTables;
use crate::error::{EngineError, EngineResult};
use crate::models::{Applicant, Gender, Recommendation};

use super::band_lookup::lookup_amounts;
use super::line_formula::recommend_line;
use super::tenure::tenure_in_months;

/// Computes the credit line recommendation for one applicant.
///
/// The calculation is pure: `now` is the instant tenure is measured at and
/// nothing is read from the clock or the filesystem.
///
/// # Returns
///
/// Returns the recommendation, or an error if:
/// - The payroll type is not in the gender's tables (`UnknownPayrollType`)
/// - No band covers the tenure (`NoMatchingBand`)
/// - The maximum amount is below the minimum (`InvalidTableData`)
///
/// # Examples
///
/// ```no_run
/// use credit_line_engine::calculation::compute_recommendation;
/// use credit_line_engine::config::ConfigLoader;
/// use credit_line_engine::models::Gender;
/// use chrono::{NaiveDate, Utc};
///
/// let tables = ConfigLoader::load("./data")?.into_tables();
/// let date = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
/// let result = compute_recommendation(&tables, "A", date, Gender::Male, Utc::now())?;
/// println!("Recommended line: {:.2}", result.recommended_line);
/// # Ok::<(), credit_line_engine::error::EngineError>(())
/// ```
pub fn compute_recommendation(
    tables: &RateTables,
    payroll_type: &str,
    first_employment_date: NaiveDate,
    gender: Gender,
    now: DateTime<Utc>,
) -> EngineResult<Recommendation> {
    let tenure_months = tenure_in_months(first_employment_date, now);
    let amounts = lookup_amounts(
        tables.for_gender(gender),
        gender,
        payroll_type,
        tenure_months,
    )?;
    let recommended_line = recommend_line(amounts.min_amount, amounts.max_amount)?;

    debug!(
        payroll_type,
        gender = %gender,
        tenure_months,
        min_amount = %amounts.min_amount,
        max_amount = %amounts.max_amount,
        recommended_line = %recommended_line,
        "Recommendation computed"
    );

    Ok(Recommendation {
        payroll_type: payroll_type.to_string(),
        first_employment_date,
        gender,
        tenure_months,
        min_amount: amounts.min_amount,
        max_amount: amounts.max_amount,
        recommended_line,
    })
}

/// Computes recommendations for every applicant, in list order.
///
/// The batch stops at the first applicant that fails and returns
/// `InvalidApplicant` carrying its position; no partial results are
/// returned.
pub fn compute_batch(
    tables: &RateTables,
    applicants: &[Applicant],
    now: DateTime<Utc>,
) -> EngineResult<Vec<Recommendation>> {
    applicants
        .iter()
        .enumerate()
        .map(|(index, applicant)| {
            compute_for_applicant(tables, applicant, now).map_err(|err| {
                warn!(index, error = %err, "Applicant could not be processed");
                EngineError::InvalidApplicant {
                    index,
                    source: Box::new(err),
                }
            })
        })
        .collect()
}

fn compute_for_applicant(
    tables: &RateTables,
    applicant: &Applicant,
    now: DateTime<Utc>,
) -> EngineResult<Recommendation> {
    let gender = applicant.resolve_gender()?;
    compute_recommendation(
        tables,
        &applicant.payroll_type,
        applicant.first_employment_date,
        gender,
        now,
    )
}
