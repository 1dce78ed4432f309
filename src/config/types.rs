//! Configuration types for the attendance calendar.
//!
//! This module contains the structures deserialized from the YAML files in
//! a configuration directory, and the assembled [`AttendanceConfig`].

use serde::Deserialize;
use tracing::warn;

use crate::calendar::Palette;
use crate::models::BranchPolicy;

/// One branch entry in `branches.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchEntry {
    /// The branch name as it appears in employee profiles.
    pub name: String,
    /// The weekday the branch closes every week (e.g. "monday"), if any.
    #[serde(default)]
    pub weekly_holiday: Option<String>,
}

/// Structure of `branches.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchesConfig {
    /// All configured branches.
    pub branches: Vec<BranchEntry>,
}

/// The complete attendance configuration.
#[derive(Debug, Clone)]
pub struct AttendanceConfig {
    /// Weekly-holiday policy per branch.
    branches: Vec<BranchPolicy>,
    /// Calendar colours.
    palette: Palette,
}

impl AttendanceConfig {
    /// Creates a new AttendanceConfig from its component parts.
    pub fn new(branches: Vec<BranchPolicy>, palette: Palette) -> Self {
        Self { branches, palette }
    }

    /// Returns all branch policies.
    pub fn branches(&self) -> &[BranchPolicy] {
        &self.branches
    }

    /// Returns the calendar palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Returns the weekly-holiday policy for a branch.
    ///
    /// Names are matched ignoring case and surrounding whitespace. An
    /// unknown branch gets a policy with no weekly holiday.
    pub fn branch_policy(&self, branch_name: &str) -> BranchPolicy {
        let wanted = branch_name.trim();
        self.branches
            .iter()
            .find(|policy| policy.branch_name.trim().eq_ignore_ascii_case(wanted))
            .cloned()
            .unwrap_or_else(|| {
                warn!(branch = %wanted, "Unknown branch, no weekly holiday applied");
                BranchPolicy::without_weekly_holiday(wanted)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn config() -> AttendanceConfig {
        AttendanceConfig::new(
            vec![
                BranchPolicy::new("Main Branch", Some(Weekday::Mon)),
                BranchPolicy::new("City Branch", Some(Weekday::Fri)),
            ],
            Palette::default(),
        )
    }

    #[test]
    fn test_branch_policy_exact_match() {
        let policy = config().branch_policy("City Branch");
        assert_eq!(policy.weekly_holiday, Some(Weekday::Fri));
    }

    #[test]
    fn test_branch_policy_ignores_case_and_whitespace() {
        let policy = config().branch_policy("  main branch ");
        assert_eq!(policy.weekly_holiday, Some(Weekday::Mon));
        assert_eq!(policy.branch_name, "Main Branch");
    }

    #[test]
    fn test_unknown_branch_has_no_weekly_holiday() {
        let policy = config().branch_policy("Harbour Office");
        assert_eq!(policy, BranchPolicy::without_weekly_holiday("Harbour Office"));
    }

    #[test]
    fn test_deserialize_branches_yaml() {
        let yaml = r#"
branches:
  - name: Main Branch
    weekly_holiday: monday
  - name: Warehouse
"#;
        let parsed: BranchesConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed.branches.len(), 2);
        assert_eq!(parsed.branches[0].weekly_holiday.as_deref(), Some("monday"));
        assert!(parsed.branches[1].weekly_holiday.is_none());
    }
}
