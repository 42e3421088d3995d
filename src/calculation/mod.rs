//! Calculation logic for the Credit Line Engine.
//!
//! This module contains the tenure calculation, the tenure band lookup over
//! the minimum and maximum tables, the line recommendation formula, and the
//! per-applicant and batch entry points that combine them.

mod band_lookup;
mod line_formula;
mod recommendation;
mod tenure;

pub use band_lookup::{BandLookupResult, find_band_amount, lookup_amounts};
pub use line_formula::{RECOMMENDED_LINE_SCALE, linear_spread_rate, recommend_line};
pub use recommendation::{compute_batch, compute_recommendation};
pub use tenure::{MONTH_LENGTH_MILLIS, tenure_in_months};
