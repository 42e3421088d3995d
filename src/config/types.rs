//! Rate table types.
//!
//! This module contains the strongly-typed structures deserialized from the
//! per-gender rate table files.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::Gender;

/// The upper bound of a tenure band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandEnd {
    /// The band ends at this many months, inclusive.
    Months(u32),
    /// The band has no upper bound.
    Unbounded,
}

impl BandEnd {
    /// Returns true if `tenure_months` does not exceed this bound.
    pub fn admits(self, tenure_months: i64) -> bool {
        match self {
            BandEnd::Months(end) => tenure_months <= i64::from(end),
            BandEnd::Unbounded => true,
        }
    }
}

/// A contiguous tenure range mapped to a fixed amount.
///
/// Deserialized from a `[start, end, amount]` triple where `end` is either
/// a number of months or the string `"Infinity"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawBand")]
pub struct Band {
    /// First month covered, inclusive.
    pub start: u32,
    /// Last month covered.
    pub end: BandEnd,
    /// The amount for tenures within this band.
    pub amount: Decimal,
}

impl Band {
    /// Returns true if `tenure_months` lies within `[start, end]`.
    pub fn contains(&self, tenure_months: i64) -> bool {
        i64::from(self.start) <= tenure_months && self.end.admits(tenure_months)
    }
}

#[derive(Deserialize)]
struct RawBand(u32, RawBandEnd, Decimal);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBandEnd {
    Months(u32),
    Token(String),
}

const UNBOUNDED_TOKEN: &str = "Infinity";

impl TryFrom<RawBand> for Band {
    type Error = String;

    fn try_from(RawBand(start, end, amount): RawBand) -> Result<Self, Self::Error> {
        let end = match end {
            RawBandEnd::Months(months) => BandEnd::Months(months),
            RawBandEnd::Token(token) if token == UNBOUNDED_TOKEN => BandEnd::Unbounded,
            RawBandEnd::Token(token) => {
                return Err(format!(
                    "invalid band end '{}': expected a month count or \"{}\"",
                    token, UNBOUNDED_TOKEN
                ));
            }
        };
        Ok(Band { start, end, amount })
    }
}

/// Identifies one of the two sub-tables of a [`RateTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountTable {
    /// The `montoMinimo` table.
    Minimum,
    /// The `montoMaximo` table.
    Maximum,
}

impl AmountTable {
    /// Returns the key this table has in the data files.
    pub fn key(self) -> &'static str {
        match self {
            AmountTable::Minimum => "montoMinimo",
            AmountTable::Maximum => "montoMaximo",
        }
    }
}

/// The minimum and maximum amount bands for one gender.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    /// Minimum-amount bands by payroll type.
    #[serde(rename = "montoMinimo")]
    pub minimum: HashMap<String, Vec<Band>>,
    /// Maximum-amount bands by payroll type.
    #[serde(rename = "montoMaximo")]
    pub maximum: HashMap<String, Vec<Band>>,
}

impl RateTable {
    /// Returns the ordered bands for a payroll type in the given sub-table.
    pub fn bands(&self, table: AmountTable, payroll_type: &str) -> Option<&[Band]> {
        let map = match table {
            AmountTable::Minimum => &self.minimum,
            AmountTable::Maximum => &self.maximum,
        };
        map.get(payroll_type).map(Vec::as_slice)
    }

    /// Returns the number of payroll types present in both sub-tables.
    pub fn payroll_type_count(&self) -> usize {
        self.minimum
            .keys()
            .filter(|key| self.maximum.contains_key(*key))
            .count()
    }
}

/// Both gender rate tables, loaded once and shared read-only.
#[derive(Debug, Clone)]
pub struct RateTables {
    male: RateTable,
    female: RateTable,
}

impl RateTables {
    /// Creates the table set from the two per-gender tables.
    pub fn new(male: RateTable, female: RateTable) -> Self {
        Self { male, female }
    }

    /// Returns the table for the given gender.
    pub fn for_gender(&self, gender: Gender) -> &RateTable {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}
