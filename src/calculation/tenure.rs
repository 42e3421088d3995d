//! Tenure calculation.
//!
//! Tenure is measured in approximate months of 30.44 days, elapsed between
//! midnight UTC of the first-employment date and the calculation instant.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Length of one tenure month in milliseconds (30.44 days).
pub const MONTH_LENGTH_MILLIS: i64 = 2_630_016_000;

/// Returns the whole months elapsed since `first_employment_date` as of `now`.
///
/// The result is floored, so a first-employment date in the future yields a
/// negative tenure rather than zero.
///
/// # Examples
///
/// ```
/// use credit_line_engine::calculation::tenure_in_months;
/// use chrono::{NaiveDate, TimeZone, Utc};
///
/// let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let now = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(tenure_in_months(start, now), 12);
/// ```
pub fn tenure_in_months(first_employment_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let started_at = first_employment_date.and_time(NaiveTime::MIN).and_utc();
    let elapsed_millis = (now - started_at).num_milliseconds();
    elapsed_millis.div_euclid(MONTH_LENGTH_MILLIS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_same_day_is_zero_months() {
        assert_eq!(tenure_in_months(date(2024, 5, 10), at(2024, 5, 10, 18)), 0);
    }

    #[test]
    fn test_thirty_days_is_still_zero_months() {
        assert_eq!(tenure_in_months(date(2020, 1, 1), at(2020, 1, 31, 0)), 0);
    }

    #[test]
    fn test_thirty_one_days_is_one_month() {
        assert_eq!(tenure_in_months(date(2020, 1, 1), at(2020, 2, 1, 0)), 1);
    }

    #[test]
    fn test_month_boundary_uses_time_of_day() {
        // 30.44 days after midnight is 30 days and 10h33m36s.
        assert_eq!(tenure_in_months(date(2020, 1, 1), at(2020, 1, 31, 10)), 0);
        assert_eq!(tenure_in_months(date(2020, 1, 1), at(2020, 1, 31, 11)), 1);
    }

    #[test]
    fn test_future_date_yields_negative_tenure() {
        assert_eq!(tenure_in_months(date(2020, 1, 2), at(2020, 1, 1, 0)), -1);
        assert_eq!(tenure_in_months(date(2021, 1, 1), at(2020, 1, 1, 0)), -13);
    }

    #[test]
    fn test_long_tenure() {
        // 3652 days / 30.44 = 119.97
        assert_eq!(tenure_in_months(date(2010, 1, 1), at(2020, 1, 1, 0)), 119);
    }
}
