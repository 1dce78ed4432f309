//! Daily work report models.
//!
//! Marketing staff log client visits; everyone else writes a free-text
//! report. Both need the device location.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The department whose reports describe client visits.
pub const MARKETING_DEPARTMENT: &str = "Marketing";

/// The visit remark that requires a follow-up date.
pub const NEXT_VISIT_REMARK: &str = "Next visit date";

/// Shortest accepted contact name on a visit report.
pub const MIN_PERSON_NAME_LENGTH: usize = 3;

/// Shortest accepted free-text report.
pub const MIN_WORK_REPORT_LENGTH: usize = 10;

/// A device location attached to a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// A work report as filled in on the work report screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkReport {
    /// The day being reported.
    pub date: NaiveDate,
    /// Contact met on a visit.
    #[serde(default)]
    pub name_of_person: String,
    /// Project discussed on a visit.
    #[serde(default)]
    pub project_name: String,
    /// Outcome of a visit.
    #[serde(default)]
    pub remarks: String,
    /// Free-text report for non-marketing staff.
    #[serde(default)]
    pub work_report: String,
    /// Follow-up date, checked only for [`NEXT_VISIT_REMARK`].
    #[serde(default)]
    pub reminder_date: Option<NaiveDate>,
    /// Where the report was filed from.
    #[serde(flatten)]
    pub location: Option<GeoPoint>,
}

impl NewWorkReport {
    /// Validates the report for an employee of `department` on `today`.
    ///
    /// Checks run in form order and the first failure is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::{GeoPoint, NewWorkReport};
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    /// let report = NewWorkReport {
    ///     date: today,
    ///     name_of_person: String::new(),
    ///     project_name: String::new(),
    ///     remarks: String::new(),
    ///     work_report: "Closed the quarterly stock audit".to_string(),
    ///     reminder_date: None,
    ///     location: Some(GeoPoint { latitude: 12.97, longitude: 77.59 }),
    /// };
    /// assert!(report.validate(Some("Accounts"), today).is_ok());
    /// ```
    pub fn validate(&self, department: Option<&str>, today: NaiveDate) -> EngineResult<()> {
        if self.date > today {
            return Err(invalid("Date cannot be in the future."));
        }

        if department == Some(MARKETING_DEPARTMENT) {
            self.validate_visit(today)?;
        } else if self.work_report.trim().chars().count() < MIN_WORK_REPORT_LENGTH {
            return Err(invalid("Work Report is required."));
        }

        if self.location.is_none() {
            return Err(invalid("Location is required."));
        }

        Ok(())
    }

    fn validate_visit(&self, today: NaiveDate) -> EngineResult<()> {
        if self.name_of_person.trim().chars().count() < MIN_PERSON_NAME_LENGTH {
            return Err(invalid("Name of Person is required."));
        }
        if self.project_name.trim().is_empty() {
            return Err(invalid("Please select a Project Name."));
        }
        if self.remarks.trim().is_empty() {
            return Err(invalid("Please select Remarks."));
        }
        if self.remarks == NEXT_VISIT_REMARK {
            match self.reminder_date {
                Some(date) if date >= today => {}
                Some(_) => return Err(invalid("Reminder date cannot be in the past.")),
                None => return Err(invalid("Please pick a next visit date.")),
            }
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidWorkReport {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn office_report() -> NewWorkReport {
        NewWorkReport {
            date: make_date("2024-06-03"),
            name_of_person: String::new(),
            project_name: String::new(),
            remarks: String::new(),
            work_report: "Reconciled vendor invoices".to_string(),
            reminder_date: None,
            location: Some(GeoPoint {
                latitude: 12.97,
                longitude: 77.59,
            }),
        }
    }

    fn visit_report() -> NewWorkReport {
        NewWorkReport {
            name_of_person: "Ravi Kumar".to_string(),
            project_name: "Sai Keshava".to_string(),
            remarks: "Interested".to_string(),
            work_report: String::new(),
            ..office_report()
        }
    }

    fn expect_invalid(result: EngineResult<()>) -> String {
        match result {
            Err(EngineError::InvalidWorkReport { message }) => message,
            other => panic!("Expected InvalidWorkReport, got {:?}", other),
        }
    }

    const TODAY: &str = "2024-06-03";

    #[test]
    fn test_office_report_is_valid() {
        assert!(office_report().validate(Some("Accounts"), make_date(TODAY)).is_ok());
        assert!(office_report().validate(None, make_date(TODAY)).is_ok());
    }

    #[test]
    fn test_future_date_rejected() {
        let mut report = office_report();
        report.date = make_date("2024-06-04");
        assert_eq!(
            expect_invalid(report.validate(None, make_date(TODAY))),
            "Date cannot be in the future."
        );
    }

    #[test]
    fn test_short_office_report_rejected() {
        let mut report = office_report();
        report.work_report = "  done   ".to_string();
        assert_eq!(
            expect_invalid(report.validate(Some("Accounts"), make_date(TODAY))),
            "Work Report is required."
        );
    }

    #[test]
    fn test_marketing_ignores_free_text_report() {
        assert!(
            visit_report()
                .validate(Some(MARKETING_DEPARTMENT), make_date(TODAY))
                .is_ok()
        );
    }

    #[test]
    fn test_marketing_requires_visit_fields() {
        let today = make_date(TODAY);

        let mut report = visit_report();
        report.name_of_person = "Al".to_string();
        assert_eq!(
            expect_invalid(report.validate(Some(MARKETING_DEPARTMENT), today)),
            "Name of Person is required."
        );

        let mut report = visit_report();
        report.project_name.clear();
        assert_eq!(
            expect_invalid(report.validate(Some(MARKETING_DEPARTMENT), today)),
            "Please select a Project Name."
        );

        let mut report = visit_report();
        report.remarks.clear();
        assert_eq!(
            expect_invalid(report.validate(Some(MARKETING_DEPARTMENT), today)),
            "Please select Remarks."
        );
    }

    #[test]
    fn test_next_visit_date_must_not_be_past() {
        let today = make_date(TODAY);
        let mut report = visit_report();
        report.remarks = NEXT_VISIT_REMARK.to_string();

        report.reminder_date = Some(make_date("2024-06-02"));
        assert_eq!(
            expect_invalid(report.validate(Some(MARKETING_DEPARTMENT), today)),
            "Reminder date cannot be in the past."
        );

        report.reminder_date = Some(today);
        assert!(report.validate(Some(MARKETING_DEPARTMENT), today).is_ok());
    }

    #[test]
    fn test_location_required() {
        let mut report = office_report();
        report.location = None;
        assert_eq!(
            expect_invalid(report.validate(None, make_date(TODAY))),
            "Location is required."
        );
    }

    #[test]
    fn test_deserialize_with_flat_location() {
        let json = r#"{
            "date": "2024-06-03",
            "workReport": "Reconciled vendor invoices",
            "latitude": 12.97,
            "longitude": 77.59
        }"#;

        let report: NewWorkReport = serde_json::from_str(json).unwrap();
        assert_eq!(
            report.location,
            Some(GeoPoint {
                latitude: 12.97,
                longitude: 77.59
            })
        );
        assert!(report.validate(None, make_date(TODAY)).is_ok());
    }
}
