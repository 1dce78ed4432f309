//! Punch record model.
//!
//! A punch record is the backend's view of one employee-day: whether a
//! punch-in and punch-out were captured, and when.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::parse_calendar_date;

/// A single day's punch activity as returned by the punch-activities endpoint.
///
/// The date is kept as the raw string the backend sent; use
/// [`PunchRecord::calendar_date`] to interpret it.
///
/// # Example
///
/// ```
/// use attendance_engine::models::PunchRecord;
///
/// let json = r#"{
///     "date": "2024-06-01T00:00:00.000Z",
///     "punchInImagePresent": true,
///     "punchOutImagePresent": false,
///     "punchInTime": "09:02:11"
/// }"#;
///
/// let record: PunchRecord = serde_json::from_str(json).unwrap();
/// assert!(record.is_open());
/// assert_eq!(record.calendar_date().unwrap().to_string(), "2024-06-01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchRecord {
    /// The day this record applies to, as sent by the backend.
    pub date: String,
    /// Whether a punch-in was captured.
    #[serde(rename = "punchInImagePresent", default)]
    pub punch_in_present: bool,
    /// Whether a punch-out was captured.
    #[serde(rename = "punchOutImagePresent", default)]
    pub punch_out_present: bool,
    /// Time of the punch-in, if any.
    #[serde(default)]
    pub punch_in_time: Option<String>,
    /// Time of the punch-out, if any.
    #[serde(default)]
    pub punch_out_time: Option<String>,
}

impl PunchRecord {
    /// Returns the calendar date of the record, or `None` if it cannot be parsed.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }

    /// Returns true if both punch-in and punch-out were captured.
    pub fn is_complete(&self) -> bool {
        self.punch_in_present && self.punch_out_present
    }

    /// Returns true if the employee punched in but has not punched out.
    pub fn is_open(&self) -> bool {
        self.punch_in_present && !self.punch_out_present
    }

    /// Returns true if the record carries a punch-out with no punch-in.
    pub fn is_inconsistent(&self) -> bool {
        !self.punch_in_present && self.punch_out_present
    }
}
