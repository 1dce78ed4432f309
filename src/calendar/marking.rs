//! Calendar marking styles.
//!
//! The calendar widget takes a map of date keys to custom styles: a
//! container background colour plus a text colour and weight. This module
//! turns derived statuses into that shape using a configurable [`Palette`].

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::DayStatus;

use super::dates::date_key;
use super::status_deriver::DerivationResult;

/// The colours used to draw one kind of marked day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkingStyle {
    /// Background colour of the day cell.
    pub background: String,
    /// Colour of the day number.
    pub text: String,
    /// Weight of the day number.
    #[serde(default = "default_font_weight")]
    pub font_weight: String,
}

fn default_font_weight() -> String {
    "bold".to_string()
}

impl MarkingStyle {
    /// Creates a bold style.
    pub fn bold(background: &str, text: &str) -> Self {
        Self {
            background: background.to_string(),
            text: text.to_string(),
            font_weight: default_font_weight(),
        }
    }

    /// Converts the style into the widget's custom-styles shape.
    pub fn to_marked_date(&self) -> MarkedDate {
        MarkedDate {
            custom_styles: CustomStyles {
                container: ContainerStyle {
                    background_color: self.background.clone(),
                },
                text: TextStyle {
                    color: self.text.clone(),
                    font_weight: self.font_weight.clone(),
                },
            },
        }
    }
}

/// The colour scheme for every marked status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Punched in and out.
    pub present: MarkingStyle,
    /// Absent.
    pub absent: MarkingStyle,
    /// Punched in today, not yet out.
    pub in_progress: MarkingStyle,
    /// Listed or weekly holiday.
    pub holiday: MarkingStyle,
    /// Days with a reminder, on the reminder calendar.
    pub reminder: MarkingStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            present: MarkingStyle::bold("lightgreen", "black"),
            absent: MarkingStyle::bold("red", "white"),
            in_progress: MarkingStyle::bold("yellow", "black"),
            holiday: MarkingStyle::bold("orange", "white"),
            reminder: MarkingStyle::bold("darkslategrey", "white"),
        }
    }
}

impl Palette {
    /// Returns the style for a status, `None` for [`DayStatus::Unmarked`].
    pub fn style_for(&self, status: DayStatus) -> Option<&MarkingStyle> {
        match status {
            DayStatus::Present => Some(&self.present),
            DayStatus::Absent => Some(&self.absent),
            DayStatus::InProgress => Some(&self.in_progress),
            DayStatus::Holiday => Some(&self.holiday),
            DayStatus::Unmarked => None,
        }
    }

    /// Returns the legend shown under the attendance calendar.
    pub fn legend(&self) -> Vec<LegendEntry> {
        [
            DayStatus::Present,
            DayStatus::Absent,
            DayStatus::InProgress,
            DayStatus::Holiday,
        ]
        .into_iter()
        .filter_map(|status| {
            self.style_for(status).map(|style| LegendEntry {
                label: status.to_string(),
                color: style.background.clone(),
            })
        })
        .collect()
    }
}

/// One entry of the calendar legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// The status label.
    pub label: String,
    /// The background colour used for it.
    pub color: String,
}

/// Per-date style override in the calendar widget's format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkedDate {
    /// The custom styles for the date.
    pub custom_styles: CustomStyles,
}

/// Container and text styles for a marked date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomStyles {
    /// The day cell.
    pub container: ContainerStyle,
    /// The day number.
    pub text: TextStyle,
}

/// The day cell style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStyle {
    /// Background colour.
    pub background_color: String,
}

/// The day number style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Text colour.
    pub color: String,
    /// Font weight.
    pub font_weight: String,
}

/// The date keyed map the calendar widget consumes.
pub type MarkedDates = BTreeMap<String, MarkedDate>;

/// Attendance statuses ready to be drawn on the calendar.
///
/// # Example
///
/// ```
/// use attendance_engine::calendar::{CalendarMarking, Palette};
/// use attendance_engine::models::DayStatus;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let marking = CalendarMarking::from_statuses([(date, DayStatus::Present)].into_iter().collect());
///
/// let marked = marking.to_marked_dates(&Palette::default());
/// assert_eq!(marked["2024-06-01"].custom_styles.container.background_color, "lightgreen");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarMarking {
    statuses: BTreeMap<NaiveDate, DayStatus>,
}

impl CalendarMarking {
    /// Creates a marking from derived statuses.
    pub fn from_statuses(statuses: BTreeMap<NaiveDate, DayStatus>) -> Self {
        Self { statuses }
    }

    /// Creates a marking from a derivation result.
    pub fn from_derivation(result: &DerivationResult) -> Self {
        Self::from_statuses(result.statuses.clone())
    }

    /// Returns true if nothing is marked.
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Returns the status drawn on `date`.
    pub fn status_on(&self, date: NaiveDate) -> DayStatus {
        self.statuses
            .get(&date)
            .copied()
            .unwrap_or(DayStatus::Unmarked)
    }

    /// Returns the underlying statuses.
    pub fn statuses(&self) -> &BTreeMap<NaiveDate, DayStatus> {
        &self.statuses
    }

    /// Converts the marking into the widget's per-date style overrides.
    pub fn to_marked_dates(&self, palette: &Palette) -> MarkedDates {
        self.statuses
            .iter()
            .filter_map(|(date, status)| {
                palette
                    .style_for(*status)
                    .map(|style| (date_key(*date), style.to_marked_date()))
            })
            .collect()
    }
}
