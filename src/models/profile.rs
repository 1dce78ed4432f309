//! Employee profile snapshot.
//!
//! The login flow stores the employee record in secure storage as JSON. Only
//! the branch name matters to the attendance calendar; the rest is carried
//! for display.

use serde::{Deserialize, Serialize};

use super::Department;

/// An employee identifier, numeric or textual depending on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmployeeId {
    /// A numeric identifier.
    Numeric(u64),
    /// A textual identifier.
    Text(String),
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeId::Numeric(id) => write!(f, "{}", id),
            EmployeeId::Text(id) => write!(f, "{}", id),
        }
    }
}

/// The branch an employee works at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    /// The branch name, used to look up the weekly holiday.
    pub branch_name: String,
}

/// The shift an employee is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftAssignment {
    /// The shift name.
    pub shift_name: String,
}

/// The employee profile stored at login.
///
/// # Example
///
/// ```
/// use attendance_engine::models::EmployeeProfile;
///
/// let json = r#"{
///     "id": 42,
///     "fullName": "Asha Rao",
///     "branch": { "branchName": "Main Branch" }
/// }"#;
///
/// let profile: EmployeeProfile = serde_json::from_str(json).unwrap();
/// assert_eq!(profile.id.to_string(), "42");
/// assert_eq!(profile.branch_name(), Some("Main Branch"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    /// The employee identifier.
    pub id: EmployeeId,
    /// Full display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Job title.
    #[serde(default)]
    pub job_title: Option<String>,
    /// Work email.
    #[serde(default)]
    pub email: Option<String>,
    /// Mobile number used for OTP login.
    #[serde(default)]
    pub mobile: Option<String>,
    /// The employee's branch.
    #[serde(default)]
    pub branch: Option<Branch>,
    /// The employee's department.
    #[serde(default)]
    pub departments: Option<Department>,
    /// The employee's shift.
    #[serde(default)]
    pub shifts: Option<ShiftAssignment>,
    /// Joining date as sent by the backend.
    #[serde(default)]
    pub date_of_joining: Option<String>,
}

impl EmployeeProfile {
    /// Returns the branch name, if the profile has one.
    pub fn branch_name(&self) -> Option<&str> {
        self.branch.as_ref().map(|b| b.branch_name.as_str())
    }

    /// Returns the department name, if the profile has one.
    pub fn department_name(&self) -> Option<&str> {
        self.departments.as_ref().and_then(|d| d.department.as_deref())
    }
}
