//! Core data models for the attendance engine.
//!
//! Most are read-only snapshots of what the backend and secure storage
//! hold, replaced wholesale on every refetch. The `New*` types are form
//! drafts that validate themselves before submission.

mod branch;
mod day_status;
mod enquiry;
mod holiday;
mod leave;
mod profile;
mod punch;
mod reminder;
mod work_report;

pub use branch::BranchPolicy;
pub use day_status::DayStatus;
pub use enquiry::{
    MAX_ENQUIRY_MESSAGE_LENGTH, MAX_ENQUIRY_TITLE_LENGTH, MIN_ENQUIRY_TEXT_LENGTH, NewEnquiry,
};
pub use holiday::{Department, HolidayEntry, sort_holidays_for_display};
pub use leave::{LeaveDay, LeaveType, MAX_LEAVE_REASON_LENGTH, NewLeaveRequest};
pub use profile::{Branch, EmployeeId, EmployeeProfile, ShiftAssignment};
pub use punch::PunchRecord;
pub use reminder::{MAX_REMINDER_MESSAGE_LENGTH, NewReminder, Reminder, default_reminder_date};
pub use work_report::{
    GeoPoint, MARKETING_DEPARTMENT, MIN_PERSON_NAME_LENGTH, MIN_WORK_REPORT_LENGTH,
    NEXT_VISIT_REMARK, NewWorkReport,
};
