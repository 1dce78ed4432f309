//! Leave request models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The longest reason a leave request may carry.
pub const MAX_LEAVE_REASON_LENGTH: usize = 50;

/// The kind of leave being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    /// Sick leave.
    Sick,
    /// Casual leave.
    Casual,
    /// Paid leave.
    Paid,
}

/// Whether the leave covers whole days or half days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeaveDay {
    /// Full day.
    FullDay,
    /// Half day.
    HalfDay,
}

/// A leave request as filled in on the leave form.
///
/// Leave type and day are optional on the wire because the form starts with
/// nothing selected.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{LeaveDay, LeaveType, NewLeaveRequest};
/// use chrono::NaiveDate;
///
/// let request = NewLeaveRequest {
///     employee_name: "Asha Rao".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
///     leave_type: Some(LeaveType::Casual),
///     leave_day: Some(LeaveDay::FullDay),
///     reason: "Family function".to_string(),
/// };
/// assert_eq!(request.validate().unwrap(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeaveRequest {
    /// The requesting employee's name.
    #[serde(default)]
    pub employee_name: String,
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Last day of leave.
    pub end_date: NaiveDate,
    /// The selected leave type.
    #[serde(default)]
    pub leave_type: Option<LeaveType>,
    /// The selected leave day.
    #[serde(default)]
    pub leave_day: Option<LeaveDay>,
    /// Free-text reason.
    #[serde(default)]
    pub reason: String,
}

impl NewLeaveRequest {
    /// Validates the form and returns the number of calendar days requested.
    ///
    /// Checks run in form order and the first failure is returned.
    pub fn validate(&self) -> EngineResult<i64> {
        if self.reason.trim().is_empty() {
            return Err(invalid("Reason for leave is required."));
        }
        if self.reason.chars().count() > MAX_LEAVE_REASON_LENGTH {
            return Err(invalid(format!(
                "Reason cannot exceed {} characters.",
                MAX_LEAVE_REASON_LENGTH
            )));
        }
        if self.leave_type.is_none() {
            return Err(invalid("Please select a leave type."));
        }
        if self.leave_day.is_none() {
            return Err(invalid("Please select leave day"));
        }
        if self.end_date < self.start_date {
            return Err(invalid("End date cannot be earlier than the start date."));
        }

        Ok((self.end_date - self.start_date).num_days() + 1)
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidLeaveRequest {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn request() -> NewLeaveRequest {
        NewLeaveRequest {
            employee_name: "Asha Rao".to_string(),
            start_date: make_date("2024-06-10"),
            end_date: make_date("2024-06-10"),
            leave_type: Some(LeaveType::Sick),
            leave_day: Some(LeaveDay::HalfDay),
            reason: "Fever".to_string(),
        }
    }

    fn expect_invalid(result: EngineResult<i64>) -> String {
        match result {
            Err(EngineError::InvalidLeaveRequest { message }) => message,
            other => panic!("Expected InvalidLeaveRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_single_day_leave_is_valid() {
        assert_eq!(request().validate().unwrap(), 1);
    }

    #[test]
    fn test_reason_required() {
        let mut leave = request();
        leave.reason = "   ".to_string();
        assert_eq!(
            expect_invalid(leave.validate()),
            "Reason for leave is required."
        );
    }

    #[test]
    fn test_reason_length_limit() {
        let mut leave = request();
        leave.reason = "a".repeat(MAX_LEAVE_REASON_LENGTH);
        assert!(leave.validate().is_ok());

        leave.reason = "a".repeat(MAX_LEAVE_REASON_LENGTH + 1);
        assert_eq!(
            expect_invalid(leave.validate()),
            "Reason cannot exceed 50 characters."
        );
    }

    #[test]
    fn test_leave_type_and_day_required() {
        let mut leave = request();
        leave.leave_type = None;
        leave.leave_day = None;
        assert_eq!(expect_invalid(leave.validate()), "Please select a leave type.");

        leave.leave_type = Some(LeaveType::Paid);
        assert_eq!(expect_invalid(leave.validate()), "Please select leave day");
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut leave = request();
        leave.end_date = make_date("2024-06-09");
        assert_eq!(
            expect_invalid(leave.validate()),
            "End date cannot be earlier than the start date."
        );
    }

    #[test]
    fn test_deserialize_form_payload() {
        let json = r#"{
            "employeeName": "Asha Rao",
            "startDate": "2024-06-10",
            "endDate": "2024-06-11",
            "leaveType": "casual",
            "leaveDay": "full-day",
            "reason": "Wedding"
        }"#;

        let leave: NewLeaveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(leave.leave_type, Some(LeaveType::Casual));
        assert_eq!(leave.leave_day, Some(LeaveDay::FullDay));
        assert_eq!(leave.validate().unwrap(), 2);
    }
}
