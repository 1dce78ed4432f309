//! HTTP request handlers for the attendance API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calendar::{
    CalendarMarking, derive_day_statuses, describe_day, describe_reminder_day, mark_reminders,
};
use crate::models::{BranchPolicy, NewEnquiry, NewLeaveRequest, NewReminder, Reminder};

use super::request::{
    CalendarRequest, DayRequest, ReminderCalendarRequest, ReminderDayRequest,
    WorkReportValidationRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, CalendarResponse, DayResponse, FormValidationResponse,
    LeaveValidationResponse, ReminderCalendarResponse, ReminderDayResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/calendar", post(calendar_handler))
        .route("/attendance/day", post(day_handler))
        .route("/reminders/calendar", post(reminder_calendar_handler))
        .route("/reminders/day", post(reminder_day_handler))
        .route("/reminders/validate", post(reminder_validate_handler))
        .route("/leaves/validate", post(leave_validate_handler))
        .route("/enquiries/validate", post(enquiry_validate_handler))
        .route("/work-reports/validate", post(work_report_validate_handler))
        .with_state(state)
}

/// Request body for `POST /reminders/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderValidationRequest {
    /// The reminder being created.
    pub draft: NewReminder,
    /// The reminders already stored.
    #[serde(default)]
    pub existing: Vec<Reminder>,
}

/// Response body for `POST /reminders/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderValidationResponse {
    /// The parsed reminder date.
    pub date: chrono::NaiveDate,
}

/// Handler for POST /attendance/calendar.
///
/// Derives the attendance calendar for the supplied records.
async fn calendar_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalendarRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calendar request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let range = match request.range() {
        Ok(range) => range,
        Err(error) => {
            warn!(
                correlation_id = %correlation_id,
                error = %error.message,
                "Invalid absence range"
            );
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let config = state.config();
    let policy = match request.branch.as_deref() {
        Some(branch) => config.branch_policy(branch),
        None => BranchPolicy::without_weekly_holiday(""),
    };
    let today = request.today.unwrap_or_else(|| Utc::now().date_naive());

    let start_time = Instant::now();
    let result = derive_day_statuses(
        &request.punch_records,
        &request.holidays,
        &policy,
        today,
        range,
    );
    let marked_dates =
        CalendarMarking::from_derivation(&result).to_marked_dates(config.palette());

    info!(
        correlation_id = %correlation_id,
        branch = %policy.branch_name,
        records = request.punch_records.len(),
        marked = marked_dates.len(),
        excluded = result.excluded.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Calendar derived"
    );

    let response = CalendarResponse {
        marked_dates,
        statuses: result.statuses,
        absence_range: result.absence_range,
        excluded: result.excluded,
        legend: config.palette().legend(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for POST /attendance/day.
async fn day_handler(payload: Result<Json<DayRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let summary = describe_day(&request.date, &request.punch_records);
    info!(correlation_id = %correlation_id, date = %request.date, "Day looked up");

    let text = summary.to_string();
    (StatusCode::OK, Json(DayResponse { summary, text })).into_response()
}

/// Handler for POST /reminders/calendar.
async fn reminder_calendar_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReminderCalendarRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let marked_dates = mark_reminders(&request.reminders, state.config().palette());
    info!(
        correlation_id = %correlation_id,
        reminders = request.reminders.len(),
        marked = marked_dates.len(),
        "Reminder calendar marked"
    );

    (StatusCode::OK, Json(ReminderCalendarResponse { marked_dates })).into_response()
}

/// Handler for POST /reminders/day.
async fn reminder_day_handler(
    payload: Result<Json<ReminderDayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let text = describe_reminder_day(&request.date, &request.reminders);
    info!(correlation_id = %correlation_id, date = %request.date, "Reminder day looked up");

    (StatusCode::OK, Json(ReminderDayResponse { text })).into_response()
}

/// Handler for POST /reminders/validate.
async fn reminder_validate_handler(
    payload: Result<Json<ReminderValidationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match request.draft.validate(&request.existing) {
        Ok(date) => (StatusCode::OK, Json(ReminderValidationResponse { date })).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Reminder rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /leaves/validate.
async fn leave_validate_handler(
    payload: Result<Json<NewLeaveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match request.validate() {
        Ok(days) => (StatusCode::OK, Json(LeaveValidationResponse { days })).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Leave request rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /enquiries/validate.
async fn enquiry_validate_handler(payload: Result<Json<NewEnquiry>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match request.validate() {
        Ok(()) => (StatusCode::OK, Json(FormValidationResponse { valid: true })).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Enquiry rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /work-reports/validate.
async fn work_report_validate_handler(
    payload: Result<Json<WorkReportValidationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let today = request.today.unwrap_or_else(|| Utc::now().date_naive());
    match request.report.validate(request.department.as_deref(), today) {
        Ok(()) => (StatusCode::OK, Json(FormValidationResponse { valid: true })).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Work report rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Converts a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}
