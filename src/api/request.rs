//! Request types for the attendance API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{DateRange, MAX_ABSENCE_RANGE_DAYS};
use crate::models::{HolidayEntry, NewWorkReport, PunchRecord, Reminder};

use super::response::ApiError;

/// Request body for `POST /attendance/calendar`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarRequest {
    /// The employee's branch name, used for the weekly holiday.
    #[serde(default)]
    pub branch: Option<String>,
    /// The reference date. Defaults to the current UTC date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    /// First day of the absence range (inclusive).
    #[serde(default)]
    pub range_start: Option<NaiveDate>,
    /// Last day of the absence range (inclusive).
    #[serde(default)]
    pub range_end: Option<NaiveDate>,
    /// The employee's punch records.
    pub punch_records: Vec<PunchRecord>,
    /// The holiday list.
    #[serde(default)]
    pub holidays: Vec<HolidayEntry>,
}

impl CalendarRequest {
    /// Returns the explicit absence range, if both bounds were given.
    ///
    /// Giving only one bound, or a range longer than
    /// [`MAX_ABSENCE_RANGE_DAYS`], is a validation error.
    pub fn range(&self) -> Result<Option<DateRange>, ApiError> {
        match (self.range_start, self.range_end) {
            (Some(start), Some(end)) => {
                let range = DateRange::new(start, end);
                if range.num_days() > MAX_ABSENCE_RANGE_DAYS {
                    return Err(ApiError::with_details(
                        "VALIDATION_ERROR",
                        format!("Absence range may span at most {MAX_ABSENCE_RANGE_DAYS} days"),
                        format!("{start} to {end} spans {} days", range.num_days()),
                    ));
                }
                Ok(Some(range))
            }
            (None, None) => Ok(None),
            _ => Err(ApiError::validation_error(
                "range_start and range_end must be given together",
            )),
        }
    }
}

/// Request body for `POST /attendance/day`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRequest {
    /// The selected date string.
    pub date: String,
    /// The employee's punch records.
    pub punch_records: Vec<PunchRecord>,
}

/// Request body for `POST /reminders/calendar`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderCalendarRequest {
    /// The stored reminders.
    pub reminders: Vec<Reminder>,
}

/// Request body for `POST /reminders/day`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderDayRequest {
    /// The selected date string.
    pub date: String,
    /// The stored reminders.
    pub reminders: Vec<Reminder>,
}

/// Request body for `POST /work-reports/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkReportValidationRequest {
    /// The report being submitted.
    pub report: NewWorkReport,
    /// The employee's department, from the stored profile.
    #[serde(default)]
    pub department: Option<String>,
    /// The reference date. Defaults to the current UTC date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}
