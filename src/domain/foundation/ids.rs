//! Strongly-typed identifier value objects.
//!
//! Identifiers are opaque strings. Exam ids are minted by the repository,
//! session ids by the aggregate, and room ids are supplied by the caller.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an organized exam (assigned by the store).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizeExamId(String);

impl OrganizeExamId {
    /// Creates a new random OrganizeExamId.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an identifier that has already been checked for emptiness.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrganizeExamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a session within an organized exam.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new random SessionId.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an identifier that has already been checked for emptiness.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller-supplied identifier of a room within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Wraps an identifier that has already been checked for emptiness.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organize_exam_id_generates_unique_values() {
        let id1 = OrganizeExamId::generate();
        let id2 = OrganizeExamId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn session_id_generates_unique_values() {
        let id1 = SessionId::generate();
        let id2 = SessionId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn generated_ids_are_uuid_strings() {
        let id = SessionId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn room_id_keeps_caller_value() {
        let id = RoomId::from_string("room123");
        assert_eq!(id.as_str(), "room123");
        assert_eq!(id.to_string(), "room123");
    }

    #[test]
    fn organize_exam_id_serializes_transparently() {
        let id = OrganizeExamId::from_string("67e94f2807292389fbc7133d");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"67e94f2807292389fbc7133d\"");
    }
}
