//! HTTP request handlers for the Credit Line Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_batch, compute_recommendation};
use crate::models::Applicant;

use super::response::{ApiError, ApiErrorResponse, BatchRequest, BatchResponse};
use super::state::AppState;

/// Header carrying the per-request correlation ID.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/recommendation", post(recommendation_handler))
        .route("/recommendations", post(batch_handler))
        .with_state(state)
}

/// Handler for POST /recommendation.
///
/// Computes the recommendation for a single applicant as of the state's
/// clock.
async fn recommendation_handler(
    State(state): State<AppState>,
    payload: Result<Json<Applicant>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing recommendation request");

    let applicant = match payload {
        Ok(Json(applicant)) => applicant,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = applicant.resolve_gender().and_then(|gender| {
        compute_recommendation(
            state.tables(),
            &applicant.payroll_type,
            applicant.first_employment_date,
            gender,
            state.now(),
        )
    });

    match result {
        Ok(recommendation) => {
            info!(
                correlation_id = %correlation_id,
                payroll_type = %recommendation.payroll_type,
                recommended_line = %recommendation.recommended_line,
                duration_us = start_time.elapsed().as_micros(),
                "Recommendation completed"
            );
            json_response(correlation_id, StatusCode::OK, &recommendation)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Recommendation failed");
            let api_error: ApiErrorResponse = err.into();
            json_response(correlation_id, api_error.status, &api_error.error)
        }
    }
}

/// Handler for POST /recommendations.
///
/// Computes recommendations for every applicant in order; the first failure
/// rejects the whole request.
async fn batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match compute_batch(state.tables(), &request.applicants, state.now()) {
        Ok(results) => {
            info!(
                correlation_id = %correlation_id,
                applicants = results.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Batch completed"
            );
            json_response(correlation_id, StatusCode::OK, &BatchResponse { results })
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Batch failed");
            let api_error: ApiErrorResponse = err.into();
            json_response(correlation_id, api_error.status, &api_error.error)
        }
    }
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(correlation_id, StatusCode::BAD_REQUEST, &error)
}

fn json_response<T: Serialize>(correlation_id: Uuid, status: StatusCode, body: &T) -> Response {
    let mut response = (status, Json(body)).into_response();
    if let Ok(value) = HeaderValue::from_str(&correlation_id.to_string()) {
        response.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
