//! Reminder calendar marking.

use tracing::warn;

use crate::models::Reminder;

use super::dates::date_key;
use super::marking::{MarkedDates, Palette};

/// Marks every reminder date with the palette's reminder style.
///
/// Reminders with unparseable dates are skipped and logged.
///
/// # Example
///
/// ```
/// use attendance_engine::calendar::{mark_reminders, Palette};
/// use attendance_engine::models::Reminder;
///
/// let reminders = vec![Reminder {
///     date: "2024-06-10T00:00:00.000Z".to_string(),
///     message: "Submit timesheet".to_string(),
/// }];
///
/// let marked = mark_reminders(&reminders, &Palette::default());
/// assert!(marked.contains_key("2024-06-10"));
/// ```
pub fn mark_reminders(reminders: &[Reminder], palette: &Palette) -> MarkedDates {
    reminders
        .iter()
        .enumerate()
        .filter_map(|(index, reminder)| match reminder.calendar_date() {
            Some(date) => Some((date_key(date), palette.reminder.to_marked_date())),
            None => {
                warn!(index, date = %reminder.date, "Skipping reminder with unparseable date");
                None
            }
        })
        .collect()
}
