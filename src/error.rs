//! Error types for the attendance engine.
//!
//! Fetch and session failures are surfaced to the caller through
//! [`EngineError`]. Per-record data problems use the same type for logging,
//! but the status deriver only ever excludes the offending record.

use thiserror::Error;

/// The main error type for the attendance engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/branches.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/branches.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No session token is available in secure storage.
    #[error("Authentication token not found")]
    MissingToken,

    /// A remote endpoint could not be reached or returned an error.
    #[error("Failed to fetch {endpoint}: {message}")]
    FetchFailed {
        /// The endpoint that failed.
        endpoint: String,
        /// A description of the failure.
        message: String,
    },

    /// A single record carried a value that could not be interpreted.
    #[error("Invalid record field '{field}': {value}")]
    InvalidRecord {
        /// The field that was invalid.
        field: String,
        /// The offending value.
        value: String,
    },

    /// The stored employee profile snapshot could not be read.
    #[error("Invalid employee profile: {message}")]
    InvalidProfile {
        /// A description of what made the profile unreadable.
        message: String,
    },

    /// A new reminder failed validation.
    #[error("Invalid reminder: {message}")]
    InvalidReminder {
        /// A description of the validation failure.
        message: String,
    },

    /// A leave request failed validation.
    #[error("Invalid leave request: {message}")]
    InvalidLeaveRequest {
        /// A description of the validation failure.
        message: String,
    },

    /// An enquiry failed validation. Every failing field is reported.
    #[error("Invalid enquiry: {}", .messages.join(" "))]
    InvalidEnquiry {
        /// One message per failing field.
        messages: Vec<String>,
    },

    /// A work report failed validation.
    #[error("Invalid work report: {message}")]
    InvalidWorkReport {
        /// A description of the validation failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/branches.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/branches.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/palette.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/palette.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_missing_token_message() {
        assert_eq!(
            EngineError::MissingToken.to_string(),
            "Authentication token not found"
        );
    }

    #[test]
    fn test_fetch_failed_displays_endpoint_and_message() {
        let error = EngineError::FetchFailed {
            endpoint: "punch-activities".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to fetch punch-activities: connection refused"
        );
    }

    #[test]
    fn test_invalid_record_displays_field_and_value() {
        let error = EngineError::InvalidRecord {
            field: "date".to_string(),
            value: "31/02/2024".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid record field 'date': 31/02/2024");
    }

    #[test]
    fn test_invalid_reminder_displays_message() {
        let error = EngineError::InvalidReminder {
            message: "Please fill in all fields".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid reminder: Please fill in all fields"
        );
    }

    #[test]
    fn test_invalid_enquiry_joins_field_messages() {
        let error = EngineError::InvalidEnquiry {
            messages: vec![
                "Title must be at least 4 characters long.".to_string(),
                "Message cannot exceed 200 characters.".to_string(),
            ],
        };
        assert_eq!(
            error.to_string(),
            "Invalid enquiry: Title must be at least 4 characters long. \
             Message cannot exceed 200 characters."
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_token() -> EngineResult<()> {
            Err(EngineError::MissingToken)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_missing_token()?;
            Ok(())
        }

        assert_eq!(propagates_error(), Err(EngineError::MissingToken));
    }
}
