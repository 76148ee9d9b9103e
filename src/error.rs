//! Custom error types for expense-report
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for report operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for input and data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// The user identity could not be resolved
    #[error("User not found for {identifier}")]
    UserNotFound { identifier: String },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The document encoder could not serialize the report
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Transport failure while dispatching a message
    #[error("Delivery error: {message}")]
    Delivery {
        message: String,
        cause: Option<String>,
    },

    /// A report operation failed; the message is already caller-facing
    #[error("{0}")]
    OperationFailed(String),
}

impl ReportError {
    /// Create a "user not found" error
    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        Self::UserNotFound {
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a delivery error with an optional underlying cause
    pub fn delivery(message: impl Into<String>, cause: Option<String>) -> Self {
        Self::Delivery {
            message: message.into(),
            cause,
        }
    }

    /// Check if this is a "user not found" error
    pub fn is_user_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound { .. })
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::UserNotFound { .. })
    }

    /// The underlying cause, when one was captured
    pub fn cause(&self) -> Option<&str> {
        match self {
            Self::Delivery { cause, .. } => cause.as_deref(),
            _ => None,
        }
    }

    /// Message shown to callers: the error itself plus its cause, if any
    pub fn failure_message(&self) -> String {
        match self.cause() {
            Some(cause) => format!("{} (Cause: {})", self, cause),
            None => self.to_string(),
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Encoding(err.to_string())
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

/// Result type alias for report operations
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReportError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_user_not_found_error() {
        let err = ReportError::user_not_found("missing@x.com");
        assert_eq!(err.to_string(), "User not found for missing@x.com");
        assert!(err.is_user_not_found());
        assert!(err.is_not_found());
    }

    #[test]
    fn test_failure_message_includes_cause() {
        let err = ReportError::delivery(
            "Failed to write message",
            Some("permission denied".into()),
        );
        assert_eq!(
            err.failure_message(),
            "Delivery error: Failed to write message (Cause: permission denied)"
        );

        let err = ReportError::delivery("Outbox unavailable", None);
        assert_eq!(err.failure_message(), "Delivery error: Outbox unavailable");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let report_err: ReportError = io_err.into();
        assert!(matches!(report_err, ReportError::Io(_)));
    }
}
