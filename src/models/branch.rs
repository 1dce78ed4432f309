//! Branch weekly-holiday policy.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// The weekly-holiday rule for a branch.
///
/// Each branch closes on at most one fixed weekday. A branch the
/// configuration does not know about gets a policy with no weekday.
///
/// # Example
///
/// ```
/// use attendance_engine::models::BranchPolicy;
/// use chrono::Weekday;
///
/// let policy = BranchPolicy::new("Main Branch", Some(Weekday::Mon));
/// assert!(policy.is_weekly_holiday(Weekday::Mon));
/// assert!(!BranchPolicy::without_weekly_holiday("Unknown").is_weekly_holiday(Weekday::Mon));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchPolicy {
    /// The branch name.
    pub branch_name: String,
    /// The weekday the branch is closed every week, if any.
    pub weekly_holiday: Option<Weekday>,
}

impl BranchPolicy {
    /// Creates a policy for a branch.
    pub fn new(branch_name: impl Into<String>, weekly_holiday: Option<Weekday>) -> Self {
        Self {
            branch_name: branch_name.into(),
            weekly_holiday,
        }
    }

    /// Creates a policy that applies no weekly holiday.
    pub fn without_weekly_holiday(branch_name: impl Into<String>) -> Self {
        Self::new(branch_name, None)
    }

    /// Returns true if `weekday` is this branch's weekly holiday.
    pub fn is_weekly_holiday(&self, weekday: Weekday) -> bool {
        self.weekly_holiday == Some(weekday)
    }
}
