//! HTTP API module for the Credit Line Engine.
//!
//! This module exposes the recommendation calculator over HTTP for callers
//! that evaluate applicants one at a time or in batches.

mod handlers;
mod response;
mod state;

pub use handlers::{CORRELATION_ID_HEADER, create_router};
pub use response::{ApiError, ApiErrorResponse, BatchRequest, BatchResponse};
pub use state::AppState;
