//! Error types for the Credit Line Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while loading rate tables or computing
//! a recommendation.

use thiserror::Error;

/// The main error type for the Credit Line Engine.
///
/// # Example
///
/// ```
/// use credit_line_engine::error::EngineError;
///
/// let error = EngineError::InvalidGender {
///     value: "x".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid gender 'x': expected 'm' or 'f'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A data file was not found or could not be read.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A data file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The payroll type is missing from the minimum or maximum table.
    #[error("Unknown payroll type '{payroll_type}' for gender '{gender}'")]
    UnknownPayrollType {
        /// The payroll type that was requested.
        payroll_type: String,
        /// The gender whose table was searched.
        gender: String,
    },

    /// No band covers the computed tenure.
    #[error(
        "No {table} band for payroll type '{payroll_type}' (gender '{gender}') covers {tenure_months} months"
    )]
    NoMatchingBand {
        /// The payroll type that was requested.
        payroll_type: String,
        /// The gender whose table was searched.
        gender: String,
        /// Which sub-table was searched ("montoMinimo" or "montoMaximo").
        table: String,
        /// The tenure that fell outside every band.
        tenure_months: i64,
    },

    /// The gender value is not one of the supported codes.
    #[error("Invalid gender '{value}': expected 'm' or 'f'")]
    InvalidGender {
        /// The rejected value.
        value: String,
    },

    /// The rate table produced amounts the formula cannot use.
    #[error("Invalid table data: {message}")]
    InvalidTableData {
        /// A description of the inconsistency.
        message: String,
    },

    /// A batch entry failed; wraps the underlying calculation error.
    #[error("Applicant #{index} could not be processed: {source}")]
    InvalidApplicant {
        /// Zero-based position of the applicant in the batch.
        index: usize,
        /// The calculation error.
        #[source]
        source: Box<EngineError>,
    },

    /// The results report could not be written.
    #[error("Failed to write report '{path}': {message}")]
    ReportWriteError {
        /// The output path.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
