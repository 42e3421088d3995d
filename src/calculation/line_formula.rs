//! Credit line recommendation formula.
//!
//! Two candidates are computed from the spread between the maximum and
//! minimum amounts: one growing with the square root of the spread and one
//! growing linearly at 1.75% of it. The larger candidate wins.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Share of the spread added by the linear candidate (1.75%).
pub fn linear_spread_rate() -> Decimal {
    Decimal::new(175, 4)
}

/// Decimal places of the recommended line.
pub const RECOMMENDED_LINE_SCALE: u32 = 2;

/// Computes the recommended line for a minimum and maximum amount.
///
/// `max(min + sqrt(spread), min + 0.0175 * spread)`, rounded to cents with
/// midpoints rounded away from zero.
///
/// # Returns
///
/// Returns `InvalidTableData` if `max_amount < min_amount` or if the
/// arithmetic overflows the decimal range.
///
/// # Examples
///
/// ```
/// use credit_line_engine::calculation::recommend_line;
/// use rust_decimal::Decimal;
///
/// let line = recommend_line(Decimal::new(10000, 0), Decimal::new(40000, 0)).unwrap();
/// assert_eq!(line, Decimal::new(1052500, 2));
/// ```
pub fn recommend_line(min_amount: Decimal, max_amount: Decimal) -> EngineResult<Decimal> {
    let spread = max_amount
        .checked_sub(min_amount)
        .ok_or_else(|| out_of_range(min_amount, max_amount))?;
    if spread < Decimal::ZERO {
        return Err(EngineError::InvalidTableData {
            message: format!(
                "maximum amount {} is below minimum amount {}",
                max_amount, min_amount
            ),
        });
    }

    let root = if spread.is_zero() {
        Decimal::ZERO
    } else {
        spread.sqrt().ok_or_else(|| EngineError::InvalidTableData {
            message: format!("cannot take the square root of spread {}", spread),
        })?
    };

    let square_root_candidate = min_amount
        .checked_add(root)
        .ok_or_else(|| out_of_range(min_amount, max_amount))?;
    let linear_candidate = linear_spread_rate()
        .checked_mul(spread)
        .and_then(|linear| min_amount.checked_add(linear))
        .ok_or_else(|| out_of_range(min_amount, max_amount))?;

    Ok(square_root_candidate
        .max(linear_candidate)
        .round_dp_with_strategy(RECOMMENDED_LINE_SCALE, RoundingStrategy::MidpointAwayFromZero))
}

fn out_of_range(min_amount: Decimal, max_amount: Decimal) -> EngineError {
    EngineError::InvalidTableData {
        message: format!(
            "amounts {} and {} are outside the representable range",
            min_amount, max_amount
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_linear_candidate_wins_for_large_spread() {
        let line = recommend_line(dec("10000"), dec("40000")).unwrap();
        assert_eq!(line, dec("10525.00"));
    }

    #[test]
    fn test_square_root_candidate_wins_for_small_spread() {
        let line = recommend_line(dec("10000"), dec("10100")).unwrap();
        assert_eq!(line, dec("10010.00"));
    }

    #[test]
    fn test_zero_spread_returns_minimum() {
        let line = recommend_line(dec("5000"), dec("5000")).unwrap();
        assert_eq!(line, dec("5000.00"));
    }

    #[test]
    fn test_result_is_rounded_to_cents() {
        // 3000 + sqrt(3000) = 3054.772255...
        let line = recommend_line(dec("3000"), dec("6000")).unwrap();
        assert_eq!(line, dec("3054.77"));
        assert!(line.scale() <= 2);
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        // 0.005 + 0.0175 * 20000 = 350.005
        let line = recommend_line(dec("0.005"), dec("20000.005")).unwrap();
        assert_eq!(line, dec("350.01"));
    }

    #[test]
    fn test_inverted_spread_returns_invalid_table_data() {
        match recommend_line(dec("40000"), dec("10000")) {
            Err(EngineError::InvalidTableData { message }) => {
                assert!(message.contains("below"), "{}", message);
            }
            other => panic!("Expected InvalidTableData, got {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_spread_returns_invalid_table_data() {
        let min = dec("-50000000000000000000000000000");
        let max = dec("50000000000000000000000000000");
        match recommend_line(min, max) {
            Err(EngineError::InvalidTableData { message }) => {
                assert!(message.contains("representable"), "{}", message);
            }
            other => panic!("Expected InvalidTableData, got {:?}", other),
        }
    }

    fn amount() -> impl Strategy<Value = Decimal> {
        (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
    }

    proptest! {
        #[test]
        fn prop_line_is_at_least_minimum(min in amount(), spread in amount()) {
            let line = recommend_line(min, min + spread).unwrap();
            prop_assert!(line >= min);
        }

        #[test]
        fn prop_line_is_monotonic_in_maximum(
            min in amount(),
            spread in amount(),
            extra in amount(),
        ) {
            let lower = recommend_line(min, min + spread).unwrap();
            let higher = recommend_line(min, min + spread + extra).unwrap();
            prop_assert!(higher >= lower);
        }

        #[test]
        fn prop_line_is_larger_candidate_rounded_to_cents(min in amount(), spread in amount()) {
            let line = recommend_line(min, min + spread).unwrap();

            let root = if spread.is_zero() { Decimal::ZERO } else { spread.sqrt().unwrap() };
            let raw = (min + root).max(min + dec("0.0175") * spread);
            let hundred = Decimal::ONE_HUNDRED;
            let expected = (raw * hundred)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                / hundred;

            prop_assert!(line.scale() <= RECOMMENDED_LINE_SCALE);
            prop_assert_eq!(line, expected);
        }
    }
}
