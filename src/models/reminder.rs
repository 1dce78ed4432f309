//! Attendance reminder models.
//!
//! Reminders are free-text notes an employee pins to a future date. They
//! are shown on their own calendar, separate from attendance.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::parse_calendar_date;
use crate::error::{EngineError, EngineResult};

/// The longest message a reminder may carry.
pub const MAX_REMINDER_MESSAGE_LENGTH: usize = 200;

/// A stored reminder as returned by the reminders endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// The reminder date, as sent by the backend.
    pub date: String,
    /// The reminder text.
    #[serde(default)]
    pub message: String,
}

impl Reminder {
    /// Returns the calendar date of the reminder, or `None` if it cannot be parsed.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }
}

/// A reminder being created from the reminder form.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{NewReminder, Reminder};
///
/// let existing = vec![Reminder {
///     date: "2024-06-10".to_string(),
///     message: "Submit timesheet".to_string(),
/// }];
///
/// let draft = NewReminder::new("Team offsite", "2024-06-11");
/// assert!(draft.validate(&existing).is_ok());
///
/// let clash = NewReminder::new("Another", "2024-06-10");
/// assert!(clash.validate(&existing).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReminder {
    /// The reminder text.
    pub message: String,
    /// The chosen date.
    pub date: String,
}

impl NewReminder {
    /// Creates a draft reminder.
    pub fn new(message: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            date: date.into(),
        }
    }

    /// Validates the draft against the reminders already stored.
    ///
    /// Returns the parsed date on success. Fails if either field is blank,
    /// the message is too long, the date cannot be parsed, or a reminder
    /// already exists on that date.
    pub fn validate(&self, existing: &[Reminder]) -> EngineResult<NaiveDate> {
        if self.message.trim().is_empty() || self.date.trim().is_empty() {
            return Err(invalid("Please fill in all fields"));
        }

        let length = self.message.chars().count();
        if length > MAX_REMINDER_MESSAGE_LENGTH {
            return Err(invalid(format!(
                "Message is {} characters, the limit is {}",
                length, MAX_REMINDER_MESSAGE_LENGTH
            )));
        }

        let date = parse_calendar_date(&self.date)
            .ok_or_else(|| invalid(format!("Unrecognised date: {}", self.date)))?;

        if existing.iter().any(|r| r.calendar_date() == Some(date)) {
            return Err(invalid("A reminder already exists for this date"));
        }

        Ok(date)
    }
}

/// The date the reminder form starts on: the day after `today`.
///
/// Stays on `today` at the last representable date.
pub fn default_reminder_date(today: NaiveDate) -> NaiveDate {
    today.succ_opt().unwrap_or(today)
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidReminder {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder(date: &str, message: &str) -> Reminder {
        Reminder {
            date: date.to_string(),
            message: message.to_string(),
        }
    }

    fn expect_invalid(result: EngineResult<NaiveDate>) -> String {
        match result {
            Err(EngineError::InvalidReminder { message }) => message,
            other => panic!("Expected InvalidReminder, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_reminder_returns_date() {
        let draft = NewReminder::new("Collect ID card", "2024-06-12");
        assert_eq!(
            draft.validate(&[]).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
        );
    }

    #[test]
    fn test_blank_fields_rejected() {
        let message = expect_invalid(NewReminder::new("  ", "2024-06-12").validate(&[]));
        assert_eq!(message, "Please fill in all fields");

        let message = expect_invalid(NewReminder::new("Hello", "").validate(&[]));
        assert_eq!(message, "Please fill in all fields");
    }

    #[test]
    fn test_message_length_limit() {
        let at_limit = "a".repeat(MAX_REMINDER_MESSAGE_LENGTH);
        assert!(NewReminder::new(at_limit, "2024-06-12").validate(&[]).is_ok());

        let over_limit = "a".repeat(MAX_REMINDER_MESSAGE_LENGTH + 1);
        let message = expect_invalid(NewReminder::new(over_limit, "2024-06-12").validate(&[]));
        assert!(message.contains("201 characters"));
    }

    #[test]
    fn test_unparseable_date_rejected() {
        let message = expect_invalid(NewReminder::new("Hello", "12/06/2024").validate(&[]));
        assert_eq!(message, "Unrecognised date: 12/06/2024");
    }

    #[test]
    fn test_duplicate_date_rejected_across_formats() {
        let existing = vec![reminder("2024-06-12T00:00:00.000Z", "Existing")];
        let message = expect_invalid(NewReminder::new("New", "2024-06-12").validate(&existing));
        assert_eq!(message, "A reminder already exists for this date");
    }

    #[test]
    fn test_default_reminder_date_is_tomorrow() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(
            default_reminder_date(today),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_default_reminder_date_at_last_date() {
        assert_eq!(default_reminder_date(NaiveDate::MAX), NaiveDate::MAX);
    }
}
