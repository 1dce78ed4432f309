//! Response types for the attendance API.
//!
//! This module defines the success bodies, the error body and the mapping
//! from [`EngineError`] to HTTP status codes.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{DateRange, DaySummary, ExcludedRecord, LegendEntry, MarkedDates};
use crate::error::EngineError;
use crate::models::DayStatus;

/// Response body for `POST /attendance/calendar`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarResponse {
    /// Per-date styles for the calendar widget.
    pub marked_dates: MarkedDates,
    /// Per-date statuses.
    pub statuses: BTreeMap<NaiveDate, DayStatus>,
    /// The range over which missing days were marked absent.
    pub absence_range: Option<DateRange>,
    /// Records skipped because of bad data.
    pub excluded: Vec<ExcludedRecord>,
    /// The calendar legend.
    pub legend: Vec<LegendEntry>,
}

/// Response body for `POST /attendance/day`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayResponse {
    /// The structured summary.
    pub summary: DaySummary,
    /// The summary as display text.
    pub text: String,
}

/// Response body for `POST /reminders/calendar`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderCalendarResponse {
    /// Per-date styles for the reminder calendar.
    pub marked_dates: MarkedDates,
}

/// Response body for `POST /reminders/day`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderDayResponse {
    /// The reminder for the day as display text.
    pub text: String,
}

/// Response body for `POST /leaves/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveValidationResponse {
    /// Calendar days covered by the request.
    pub days: i64,
}

/// Response body for form checks that carry nothing back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormValidationResponse {
    /// Always true; failures are reported as errors.
    pub valid: bool,
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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
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

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, code) = match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
            EngineError::MissingToken => (StatusCode::UNAUTHORIZED, "MISSING_TOKEN"),
            EngineError::FetchFailed { .. } => (StatusCode::BAD_GATEWAY, "FETCH_FAILED"),
            EngineError::InvalidRecord { .. } => (StatusCode::BAD_REQUEST, "INVALID_RECORD"),
            EngineError::InvalidProfile { .. } => (StatusCode::BAD_REQUEST, "INVALID_PROFILE"),
            EngineError::InvalidReminder { .. } => (StatusCode::BAD_REQUEST, "INVALID_REMINDER"),
            EngineError::InvalidLeaveRequest { .. } => {
                (StatusCode::BAD_REQUEST, "INVALID_LEAVE_REQUEST")
            }
            EngineError::InvalidEnquiry { .. } => (StatusCode::BAD_REQUEST, "INVALID_ENQUIRY"),
            EngineError::InvalidWorkReport { .. } => {
                (StatusCode::BAD_REQUEST, "INVALID_WORK_REPORT")
            }
        };
        ApiErrorResponse {
            status,
            error: ApiError::new(code, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_missing_token_maps_to_unauthorized() {
        let api_error: ApiErrorResponse = EngineError::MissingToken.into();
        assert_eq!(api_error.status, StatusCode::UNAUTHORIZED);
        assert_eq!(api_error.error.code, "MISSING_TOKEN");
        assert_eq!(api_error.error.message, "Authentication token not found");
    }

    #[test]
    fn test_config_errors_map_to_internal_error() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "branches.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_invalid_reminder_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidReminder {
            message: "A reminder already exists for this date".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_REMINDER");
    }

    #[test]
    fn test_form_errors_map_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidEnquiry {
            messages: vec!["Title must be at least 4 characters long.".to_string()],
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_ENQUIRY");

        let api_error: ApiErrorResponse = EngineError::InvalidLeaveRequest {
            message: "Please select leave day".to_string(),
        }
        .into();
        assert_eq!(api_error.error.code, "INVALID_LEAVE_REQUEST");
    }
}
