//! HTTP API module for the attendance engine.
//!
//! This module exposes the calendar derivation, day lookup, reminder and
//! form validation endpoints as a JSON REST API.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{ReminderValidationRequest, ReminderValidationResponse, create_router};
pub use request::{
    CalendarRequest, DayRequest, ReminderCalendarRequest, ReminderDayRequest,
    WorkReportValidationRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, CalendarResponse, DayResponse, FormValidationResponse,
    LeaveValidationResponse, ReminderCalendarResponse, ReminderDayResponse,
};
pub use state::AppState;
