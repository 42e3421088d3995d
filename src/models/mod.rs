//! Core data models for the Credit Line Engine.

mod applicant;
mod recommendation;

pub use applicant::{Applicant, Gender};
pub use recommendation::Recommendation;
