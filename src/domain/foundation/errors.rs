//! Error types for the domain layer.
//!
//! Validation messages are part of the external contract: callers match on
//! the exact text, so the `#[error]` strings below must not drift.

use std::fmt;
use thiserror::Error;

/// Errors raised by request validators before any store access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyField { field: String },

    #[error("{field} must be greater than zero")]
    NotPositive { field: String },

    #[error("{field} must be in the future")]
    NotInFuture { field: String },

    #[error("Invalid session status")]
    InvalidSessionStatus,

    #[error("Invalid exam status")]
    InvalidExamStatus,
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a non-positive number validation error.
    pub fn not_positive(field: impl Into<String>) -> Self {
        ValidationError::NotPositive { field: field.into() }
    }

    /// Creates a "must be in the future" validation error.
    pub fn not_in_future(field: impl Into<String>) -> Self {
        ValidationError::NotInFuture { field: field.into() }
    }

    /// Name of the offending request field, when the rule is field-scoped.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::NotPositive { field }
            | ValidationError::NotInFuture { field } => Some(field),
            ValidationError::InvalidSessionStatus => Some("SessionStatus"),
            ValidationError::InvalidExamStatus => Some("OrganizeExamStatus"),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    OrganizeExamNotFound,
    SessionNotFound,
    RoomNotFound,

    // Concurrency errors
    ConcurrentModification,

    // Infrastructure errors
    StoreUnavailable,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::OrganizeExamNotFound => "ORGANIZE_EXAM_NOT_FOUND",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::RoomNotFound => "ROOM_NOT_FOUND",
            ErrorCode::ConcurrentModification => "CONCURRENT_MODIFICATION",
            ErrorCode::StoreUnavailable => "STORE_UNAVAILABLE",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_displays_contract_message() {
        let err = ValidationError::empty_field("OrganizeExamName");
        assert_eq!(err.to_string(), "OrganizeExamName cannot be empty");
    }

    #[test]
    fn not_positive_displays_contract_message() {
        let err = ValidationError::not_positive("Duration");
        assert_eq!(err.to_string(), "Duration must be greater than zero");
    }

    #[test]
    fn not_in_future_displays_contract_message() {
        let err = ValidationError::not_in_future("ActiveAt");
        assert_eq!(err.to_string(), "ActiveAt must be in the future");
    }

    #[test]
    fn status_errors_display_contract_message() {
        assert_eq!(
            ValidationError::InvalidSessionStatus.to_string(),
            "Invalid session status"
        );
        assert_eq!(
            ValidationError::InvalidExamStatus.to_string(),
            "Invalid exam status"
        );
    }

    #[test]
    fn field_is_reported_for_field_scoped_rules() {
        assert_eq!(ValidationError::empty_field("RoomId").field(), Some("RoomId"));
        assert_eq!(
            ValidationError::InvalidSessionStatus.field(),
            Some("SessionStatus")
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::SessionNotFound), "SESSION_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::StoreUnavailable), "STORE_UNAVAILABLE");
    }
}
