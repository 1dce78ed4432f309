//! Day-selection lookups.
//!
//! Tapping a calendar day shows a short summary of what was recorded on it.

use serde::{Deserialize, Serialize};

use crate::models::{PunchRecord, Reminder};

use super::dates::parse_calendar_date;

/// What a tapped attendance day shows.
///
/// # Example
///
/// ```
/// use attendance_engine::calendar::describe_day;
///
/// let summary = describe_day("2024-06-09", &[]);
/// assert_eq!(summary.to_string(), "No records found for 2024-06-09");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DaySummary {
    /// A punch record exists for the day.
    Recorded {
        /// The selected date.
        date: String,
        /// Punch-in time, if recorded.
        punched_in: Option<String>,
        /// Punch-out time, if recorded.
        punched_out: Option<String>,
        /// True if both punches were captured.
        complete: bool,
    },
    /// Nothing was recorded for the day.
    NoRecord {
        /// The selected date.
        date: String,
    },
}

impl std::fmt::Display for DaySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DaySummary::Recorded {
                date,
                punched_in,
                punched_out,
                complete,
            } => {
                writeln!(f, "Date: {}", date)?;
                writeln!(
                    f,
                    "Punched-in: {}",
                    punched_in.as_deref().unwrap_or("Not recorded")
                )?;
                writeln!(
                    f,
                    "Punched-out: {}",
                    punched_out.as_deref().unwrap_or("Not done yet")
                )?;
                write!(
                    f,
                    "Status: {}",
                    if *complete { "Present" } else { "In-Progress" }
                )
            }
            DaySummary::NoRecord { date } => write!(f, "No records found for {}", date),
        }
    }
}

/// Looks up the punch record for a selected date.
///
/// Dates are compared after parsing, so a selection of `2024-06-01` matches a
/// record stamped `2024-06-01T00:00:00.000Z`. The first matching record wins.
/// An unparseable selection finds nothing.
pub fn describe_day(selected: &str, punch_records: &[PunchRecord]) -> DaySummary {
    let found = parse_calendar_date(selected).and_then(|date| {
        punch_records
            .iter()
            .find(|record| record.calendar_date() == Some(date))
    });

    match found {
        Some(record) => DaySummary::Recorded {
            date: selected.to_string(),
            punched_in: record.punch_in_time.clone(),
            punched_out: record.punch_out_time.clone(),
            complete: record.is_complete(),
        },
        None => DaySummary::NoRecord {
            date: selected.to_string(),
        },
    }
}

/// Looks up the reminder for a selected date on the reminder calendar.
pub fn describe_reminder_day(selected: &str, reminders: &[Reminder]) -> String {
    let found = parse_calendar_date(selected).and_then(|date| {
        reminders
            .iter()
            .find(|reminder| reminder.calendar_date() == Some(date))
    });

    match found {
        Some(reminder) => format!("Date: {}\nMessage: {}", selected, reminder.message),
        None => format!("No reminder found for {}", selected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn punch(date: &str, punch_in: Option<&str>, punch_out: Option<&str>) -> PunchRecord {
        PunchRecord {
            date: date.to_string(),
            punch_in_present: punch_in.is_some(),
            punch_out_present: punch_out.is_some(),
            punch_in_time: punch_in.map(str::to_string),
            punch_out_time: punch_out.map(str::to_string),
        }
    }

    #[test]
    fn test_describe_complete_day() {
        let records = vec![punch("2024-06-01T00:00:00.000Z", Some("09:01"), Some("18:05"))];
        let summary = describe_day("2024-06-01", &records);

        assert_eq!(
            summary.to_string(),
            "Date: 2024-06-01\nPunched-in: 09:01\nPunched-out: 18:05\nStatus: Present"
        );
    }

    #[test]
    fn test_describe_open_day() {
        let records = vec![punch("2024-06-03", Some("09:30"), None)];
        let summary = describe_day("2024-06-03", &records);

        assert_eq!(
            summary.to_string(),
            "Date: 2024-06-03\nPunched-in: 09:30\nPunched-out: Not done yet\nStatus: In-Progress"
        );
    }

    #[test]
    fn test_describe_missing_day() {
        let records = vec![punch("2024-06-03", Some("09:30"), None)];
        assert_eq!(
            describe_day("2024-06-04", &records),
            DaySummary::NoRecord {
                date: "2024-06-04".to_string()
            }
        );
    }

    #[test]
    fn test_describe_unparseable_selection() {
        let records = vec![punch("2024-06-03", Some("09:30"), None)];
        assert_eq!(
            describe_day("garbage", &records).to_string(),
            "No records found for garbage"
        );
    }

    #[test]
    fn test_first_matching_record_wins() {
        let records = vec![
            punch("2024-06-03", Some("09:30"), None),
            punch("2024-06-03", Some("10:00"), Some("19:00")),
        ];
        match describe_day("2024-06-03", &records) {
            DaySummary::Recorded { punched_in, .. } => {
                assert_eq!(punched_in.as_deref(), Some("09:30"))
            }
            other => panic!("Expected a recorded day, got {:?}", other),
        }
    }

    #[test]
    fn test_day_summary_serialization() {
        let json = serde_json::to_string(&DaySummary::NoRecord {
            date: "2024-06-04".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"no_record","date":"2024-06-04"}"#);
    }

    #[test]
    fn test_describe_reminder_day() {
        let reminders = vec![Reminder {
            date: "2024-06-10".to_string(),
            message: "Submit timesheet".to_string(),
        }];

        assert_eq!(
            describe_reminder_day("2024-06-10", &reminders),
            "Date: 2024-06-10\nMessage: Submit timesheet"
        );
        assert_eq!(
            describe_reminder_day("2024-06-11", &reminders),
            "No reminder found for 2024-06-11"
        );
    }
}
