//! Holiday list model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::parse_calendar_date;

/// The department a holiday is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// The department name.
    #[serde(default)]
    pub department: Option<String>,
    /// A longer description of the department.
    #[serde(default)]
    pub department_description: Option<String>,
}

/// A holiday entry as returned by the holiday-list endpoint.
///
/// # Example
///
/// ```
/// use attendance_engine::models::HolidayEntry;
///
/// let json = r#"{
///     "holidayDate": "2024-08-15",
///     "reasonForHoliday": "Independence Day",
///     "departments": null
/// }"#;
///
/// let holiday: HolidayEntry = serde_json::from_str(json).unwrap();
/// assert_eq!(holiday.department_label(), "N/A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The date of the holiday, as sent by the backend.
    #[serde(rename = "holidayDate")]
    pub holiday_date: String,
    /// Why the day is a holiday.
    #[serde(rename = "reasonForHoliday", default)]
    pub reason: String,
    /// Optional department scope.
    #[serde(rename = "departments", default)]
    pub department: Option<Department>,
}

impl HolidayEntry {
    /// Returns the calendar date of the holiday, or `None` if it cannot be parsed.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.holiday_date)
    }

    /// Returns the department name for display, falling back to "N/A".
    pub fn department_label(&self) -> &str {
        self.department
            .as_ref()
            .and_then(|d| d.department.as_deref())
            .unwrap_or("N/A")
    }
}

/// Sorts holidays by date for the holiday list, unparseable dates last.
///
/// The sort is stable so entries sharing a date keep their backend order.
pub fn sort_holidays_for_display(holidays: &mut [HolidayEntry]) {
    holidays.sort_by_key(|h| (h.calendar_date().is_none(), h.calendar_date()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(date: &str, reason: &str) -> HolidayEntry {
        HolidayEntry {
            holiday_date: date.to_string(),
            reason: reason.to_string(),
            department: None,
        }
    }

    #[test]
    fn test_deserialize_with_department() {
        let json = r#"{
            "holidayDate": "2024-10-02",
            "reasonForHoliday": "Gandhi Jayanti",
            "departments": {
                "department": "Sales",
                "departmentDescription": "Field sales team"
            }
        }"#;

        let holiday: HolidayEntry = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.reason, "Gandhi Jayanti");
        assert_eq!(holiday.department_label(), "Sales");
        assert_eq!(
            holiday
                .department
                .as_ref()
                .and_then(|d| d.department_description.as_deref()),
            Some("Field sales team")
        );
        assert_eq!(
            holiday.calendar_date(),
            NaiveDate::from_ymd_opt(2024, 10, 2)
        );
    }

    #[test]
    fn test_department_without_name_falls_back() {
        let mut entry = holiday("2024-10-02", "Festival");
        entry.department = Some(Department {
            department: None,
            department_description: Some("Unnamed".to_string()),
        });
        assert_eq!(entry.department_label(), "N/A");
    }

    #[test]
    fn test_sort_for_display() {
        let mut holidays = vec![
            holiday("2024-12-25", "Christmas"),
            holiday("garbage", "Unknown"),
            holiday("2024-01-26", "Republic Day"),
        ];

        sort_holidays_for_display(&mut holidays);

        let reasons: Vec<&str> = holidays.iter().map(|h| h.reason.as_str()).collect();
        assert_eq!(reasons, vec!["Republic Day", "Christmas", "Unknown"]);
    }
}
