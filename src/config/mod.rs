//! Rate table loading for the Credit Line Engine.
//!
//! This module loads the per-gender rate tables and the applicant list from
//! JSON files and exposes them as immutable, strongly-typed structures.
//!
//! # Example
//!
//! ```no_run
//! use credit_line_engine::config::ConfigLoader;
//!
//! let tables = ConfigLoader::load("./data").unwrap().into_tables();
//! ```

mod loader;
mod types;

pub use loader::{APPLICANTS_FILE, ConfigLoader, FEMALE_TABLE_FILE, MALE_TABLE_FILE};
pub use types::{AmountTable, Band, BandEnd, RateTable, RateTables};
