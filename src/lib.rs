//! Credit Line Engine
//!
//! This crate recommends a credit line for an applicant from gender- and
//! payroll-type-specific rate tables indexed by tenure bands.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod telemetry;
