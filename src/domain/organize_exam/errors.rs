//! Organize-exam error taxonomy.

use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{ErrorCode, OrganizeExamId, RoomId, SessionId, ValidationError};

/// Kind of node an identifier failed to resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    OrganizeExam,
    Session,
    Room,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::OrganizeExam => "Organize exam",
            EntityKind::Session => "Session",
            EntityKind::Room => "Room",
        };
        write!(f, "{}", s)
    }
}

/// Every public operation either returns the aggregate or exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrganizeExamError {
    /// A request rule was violated; the message is the contract text.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A well-formed identifier did not resolve within the aggregate.
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: String },

    /// Concurrent writers kept winning the version race.
    #[error("Organize exam {0} was modified concurrently, please retry")]
    Conflict(OrganizeExamId),

    /// Transport or database failure, surfaced without retry.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl OrganizeExamError {
    pub fn exam_not_found(id: &OrganizeExamId) -> Self {
        OrganizeExamError::NotFound {
            entity: EntityKind::OrganizeExam,
            id: id.to_string(),
        }
    }

    pub fn session_not_found(id: &SessionId) -> Self {
        OrganizeExamError::NotFound {
            entity: EntityKind::Session,
            id: id.to_string(),
        }
    }

    pub fn room_not_found(id: &RoomId) -> Self {
        OrganizeExamError::NotFound {
            entity: EntityKind::Room,
            id: id.to_string(),
        }
    }

    pub fn store_unavailable(message: impl Into<String>) -> Self {
        OrganizeExamError::StoreUnavailable(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            OrganizeExamError::Validation(_) => ErrorCode::ValidationFailed,
            OrganizeExamError::NotFound { entity, .. } => match entity {
                EntityKind::OrganizeExam => ErrorCode::OrganizeExamNotFound,
                EntityKind::Session => ErrorCode::SessionNotFound,
                EntityKind::Room => ErrorCode::RoomNotFound,
            },
            OrganizeExamError::Conflict(_) => ErrorCode::ConcurrentModification,
            OrganizeExamError::StoreUnavailable(_) => ErrorCode::StoreUnavailable,
        }
    }
}
