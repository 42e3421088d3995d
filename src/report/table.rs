//! Fixed-width results table.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculation::RECOMMENDED_LINE_SCALE;
use crate::models::Recommendation;

/// Header row of the results table.
pub const TABLE_HEADER: &str =
    "Tipo Nómina | Fecha Primer Empleo | Género | Mínimo | Máximo | Línea Óptima";

const SEPARATOR_WIDTH: usize = 74;
const PAYROLL_TYPE_WIDTH: usize = 11;
const DATE_WIDTH: usize = 19;
const GENDER_WIDTH: usize = 6;
const AMOUNT_WIDTH: usize = 6;

/// Renders recommendations as a pipe-separated, space-padded table.
///
/// Every line, including the last row, ends with a newline. Amounts print in
/// their shortest form and the recommended line always shows two decimals.
///
/// # Examples
///
/// ```
/// use credit_line_engine::report::{TABLE_HEADER, render_table};
///
/// let table = render_table(&[]);
/// assert!(table.starts_with(TABLE_HEADER));
/// assert_eq!(table.lines().count(), 2);
/// ```
pub fn render_table(results: &[Recommendation]) -> String {
    let mut table = String::new();
    table.push_str(TABLE_HEADER);
    table.push('\n');
    table.push_str(&"-".repeat(SEPARATOR_WIDTH));
    table.push('\n');

    for result in results {
        table.push_str(&format!(
            "{:<pw$} | {:<dw$} | {:<gw$} | {:<aw$} | {:<aw$} | {}\n",
            result.payroll_type,
            result.first_employment_date.to_string(),
            result.gender.code(),
            format_amount(result.min_amount),
            format_amount(result.max_amount),
            format_line(result.recommended_line),
            pw = PAYROLL_TYPE_WIDTH,
            dw = DATE_WIDTH,
            gw = GENDER_WIDTH,
            aw = AMOUNT_WIDTH,
        ));
    }

    table
}

fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

fn format_line(line: Decimal) -> String {
    let mut line = line.round_dp_with_strategy(
        RECOMMENDED_LINE_SCALE,
        RoundingStrategy::MidpointAwayFromZero,
    );
    line.rescale(RECOMMENDED_LINE_SCALE);
    line.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn recommendation(payroll_type: &str, min: &str, max: &str, line: &str) -> Recommendation {
        Recommendation {
            payroll_type: payroll_type.to_string(),
            first_employment_date: NaiveDate::from_ymd_opt(2015, 3, 10).unwrap(),
            gender: Gender::Male,
            tenure_months: 140,
            min_amount: dec(min),
            max_amount: dec(max),
            recommended_line: dec(line),
        }
    }

    #[test]
    fn test_header_and_separator() {
        let table = render_table(&[]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], TABLE_HEADER);
        assert_eq!(lines[1], "-".repeat(74));
        assert!(table.ends_with('\n'));
    }

    #[test]
    fn test_row_is_padded_to_column_widths() {
        let table = render_table(&[recommendation("A", "15000", "60000", "15787.5")]);
        let row = table.lines().nth(2).unwrap();

        assert_eq!(
            row,
            "A           | 2015-03-10          | m      | 15000  | 60000  | 15787.50"
        );
    }

    #[test]
    fn test_wide_values_are_not_truncated() {
        let table = render_table(&[recommendation("QUINCENAL_X", "1500000", "2500000", "1517500")]);
        let row = table.lines().nth(2).unwrap();

        assert_eq!(
            row,
            "QUINCENAL_X | 2015-03-10          | m      | 1500000 | 2500000 | 1517500.00"
        );
    }

    #[test]
    fn test_amounts_use_shortest_form() {
        let table = render_table(&[recommendation("B", "5000.50", "5000.50", "5000.50")]);
        let row = table.lines().nth(2).unwrap();

        assert!(row.contains("| 5000.5 | 5000.5 | 5000.50"), "{}", row);
    }

    #[test]
    fn test_unrounded_line_rounds_half_away_from_zero() {
        let table = render_table(&[recommendation("A", "1", "1", "1000.125")]);
        let row = table.lines().nth(2).unwrap();

        assert!(row.ends_with("| 1000.13"), "{}", row);
    }

    #[test]
    fn test_rows_follow_result_order() {
        let table = render_table(&[
            recommendation("C", "1", "1", "1"),
            recommendation("A", "2", "2", "2"),
        ]);
        let first_columns: Vec<&str> = table
            .lines()
            .skip(2)
            .map(|line| line.split(" | ").next().unwrap().trim_end())
            .collect();

        assert_eq!(first_columns, vec!["C", "A"]);
    }
}
