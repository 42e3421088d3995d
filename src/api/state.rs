//! Application state for the Credit Line Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::RateTables;

type Clock = dyn Fn() -> DateTime<Utc> + Send + Sync;

/// Shared application state.
///
/// Holds the rate tables, shared read-only across requests, and the clock
/// used as the calculation instant.
#[derive(Clone)]
pub struct AppState {
    tables: Arc<RateTables>,
    clock: Arc<Clock>,
}

impl AppState {
    /// Creates a new application state that measures tenure against the
    /// system clock.
    pub fn new(tables: RateTables) -> Self {
        Self::with_clock(tables, Utc::now)
    }

    /// Creates a new application state with a custom clock.
    pub fn with_clock<F>(tables: RateTables, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        Self {
            tables: Arc::new(tables),
            clock: Arc::new(clock),
        }
    }

    /// Returns the shared rate tables.
    pub fn tables(&self) -> &RateTables {
        &self.tables
    }

    /// Returns the current calculation instant.
    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }
}
