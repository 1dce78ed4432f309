//! Enquiry models.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Shortest title or message an enquiry may carry, after trimming.
pub const MIN_ENQUIRY_TEXT_LENGTH: usize = 4;
/// Longest enquiry title.
pub const MAX_ENQUIRY_TITLE_LENGTH: usize = 30;
/// Longest enquiry message.
pub const MAX_ENQUIRY_MESSAGE_LENGTH: usize = 200;

/// An enquiry as filled in on the enquiry form.
///
/// # Example
///
/// ```
/// use attendance_engine::models::NewEnquiry;
///
/// assert!(NewEnquiry::new("Payslip", "May payslip is missing").validate().is_ok());
/// assert!(NewEnquiry::new("Hi", "ok").validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEnquiry {
    /// Short subject line.
    pub title: String,
    /// The enquiry body.
    pub message: String,
}

impl NewEnquiry {
    /// Creates a draft enquiry.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Validates both fields, reporting every failing one.
    pub fn validate(&self) -> EngineResult<()> {
        let messages: Vec<String> = [
            check_length("Title", &self.title, MAX_ENQUIRY_TITLE_LENGTH),
            check_length("Message", &self.message, MAX_ENQUIRY_MESSAGE_LENGTH),
        ]
        .into_iter()
        .flatten()
        .collect();

        if messages.is_empty() {
            Ok(())
        } else {
            Err(EngineError::InvalidEnquiry { messages })
        }
    }
}

fn check_length(label: &str, value: &str, max: usize) -> Option<String> {
    if value.trim().chars().count() < MIN_ENQUIRY_TEXT_LENGTH {
        Some(format!(
            "{} must be at least {} characters long.",
            label, MIN_ENQUIRY_TEXT_LENGTH
        ))
    } else if value.chars().count() > max {
        Some(format!("{} cannot exceed {} characters.", label, max))
    } else {
        None
    }
}
