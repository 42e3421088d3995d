//! Tenure band lookup.
//!
//! This module resolves the minimum and maximum amounts for a payroll type
//! by scanning the tenure bands of the applicant's rate table.

use rust_decimal::Decimal;

use crate::config::{AmountTable, Band, RateTable};
use crate::error::{EngineError, EngineResult};
use crate::models::Gender;

/// The amounts resolved from both sub-tables for one tenure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandLookupResult {
    /// Amount from the minimum table.
    pub min_amount: Decimal,
    /// Amount from the maximum table.
    pub max_amount: Decimal,
}

/// Returns the amount of the first band containing `tenure_months`.
///
/// Bands are scanned in order and the first match wins, so overlapping
/// bands resolve to the earlier one.
///
/// # Examples
///
/// ```
/// use credit_line_engine::calculation::find_band_amount;
/// use credit_line_engine::config::{Band, BandEnd};
/// use rust_decimal::Decimal;
///
/// let bands = vec![
///     Band { start: 0, end: BandEnd::Months(12), amount: Decimal::new(1000, 0) },
///     Band { start: 13, end: BandEnd::Unbounded, amount: Decimal::new(2000, 0) },
/// ];
/// assert_eq!(find_band_amount(&bands, 12), Some(Decimal::new(1000, 0)));
/// assert_eq!(find_band_amount(&bands, 500), Some(Decimal::new(2000, 0)));
/// assert_eq!(find_band_amount(&bands, -1), None);
/// ```
pub fn find_band_amount(bands: &[Band], tenure_months: i64) -> Option<Decimal> {
    bands
        .iter()
        .find(|band| band.contains(tenure_months))
        .map(|band| band.amount)
}

/// Resolves the minimum and maximum amounts for a payroll type and tenure.
///
/// # Returns
///
/// Returns both amounts, or an error if:
/// - The payroll type is absent from either sub-table (`UnknownPayrollType`)
/// - No band in a sub-table covers the tenure (`NoMatchingBand`)
pub fn lookup_amounts(
    table: &RateTable,
    gender: Gender,
    payroll_type: &str,
    tenure_months: i64,
) -> EngineResult<BandLookupResult> {
    let unknown = || EngineError::UnknownPayrollType {
        payroll_type: payroll_type.to_string(),
        gender: gender.to_string(),
    };

    let min_bands = table
        .bands(AmountTable::Minimum, payroll_type)
        .ok_or_else(unknown)?;
    let max_bands = table
        .bands(AmountTable::Maximum, payroll_type)
        .ok_or_else(unknown)?;

    let resolve = |bands: &[Band], kind: AmountTable| {
        find_band_amount(bands, tenure_months).ok_or_else(|| EngineError::NoMatchingBand {
            payroll_type: payroll_type.to_string(),
            gender: gender.to_string(),
            table: kind.key().to_string(),
            tenure_months,
        })
    };

    Ok(BandLookupResult {
        min_amount: resolve(min_bands, AmountTable::Minimum)?,
        max_amount: resolve(max_bands, AmountTable::Maximum)?,
    })
}
