//! Derived day status.

use serde::{Deserialize, Serialize};

/// The attendance status shown for a single calendar day.
///
/// Statuses are derived on every load and never persisted.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DayStatus;
///
/// assert_eq!(DayStatus::InProgress.to_string(), "In Progress");
/// assert!(!DayStatus::Unmarked.is_marked());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Punched in and out.
    Present,
    /// No attendance, or a punch-in that was never closed on a past day.
    Absent,
    /// Punched in today and not yet punched out.
    InProgress,
    /// A listed holiday or the branch's weekly holiday.
    Holiday,
    /// Nothing known about the day.
    Unmarked,
}

impl DayStatus {
    /// Returns true for every status that gets calendar styling.
    pub fn is_marked(&self) -> bool {
        !matches!(self, DayStatus::Unmarked)
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayStatus::Present => write!(f, "Present"),
            DayStatus::Absent => write!(f, "Absent"),
            DayStatus::InProgress => write!(f, "In Progress"),
            DayStatus::Holiday => write!(f, "Holiday"),
            DayStatus::Unmarked => write!(f, "Unmarked"),
        }
    }
}
