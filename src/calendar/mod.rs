//! Attendance calendar logic.
//!
//! This module contains date parsing, the attendance status deriver, the
//! conversion of statuses into calendar styles, day-selection lookups and
//! reminder marking.

mod dates;
mod day_selection;
mod marking;
mod reminders;
mod status_deriver;

pub use dates::{
    DATE_KEY_FORMAT, DateRange, MAX_ABSENCE_RANGE_DAYS, date_key, parse_calendar_date,
};
pub use day_selection::{DaySummary, describe_day, describe_reminder_day};
pub use marking::{
    CalendarMarking, ContainerStyle, CustomStyles, LegendEntry, MarkedDate, MarkedDates,
    MarkingStyle, Palette, TextStyle,
};
pub use reminders::mark_reminders;
pub use status_deriver::{
    DerivationResult, ExcludedRecord, ExclusionReason, RecordSource, derive_day_statuses,
};
