//! Response types for the attendance computation engine API.
//!
//! This module defines the success and error response structures for the
//! HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::DailyStats;

/// Success body for the `/calculate` endpoint.
///
/// The computed [`DailyStats`] fields are flattened into the body, plus an
/// optional fixed note the caller appends to the attendance record when the
/// measured break was exceeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// The computed daily figures.
    #[serde(flatten)]
    pub stats: DailyStats,
    /// Fixed admin note, present only when `break_exceeded` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<DailyStats> for CalculationResponse {
    fn from(stats: DailyStats) -> Self {
        let note = stats.break_note().map(str::to_string);
        Self { stats, note }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidTimestamp { field, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIMESTAMP",
                    format!("Invalid timestamp in '{}': {}", field, value),
                    "check_in_at and check_out_at must be RFC 3339 instants",
                ),
            },
            EngineError::InvalidShiftTime { field, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SHIFT_TIME",
                    format!("Invalid shift time in '{}': {}", field, value),
                    "Shift boundary times must be HH:MM wall-clock strings",
                ),
            },
        }
    }
}
