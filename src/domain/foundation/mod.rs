//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the exam organization domain.

mod errors;
mod exam_status;
mod ids;
mod session_status;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use exam_status::ExamStatus;
pub use ids::{OrganizeExamId, RoomId, SessionId};
pub use session_status::SessionStatus;
pub use timestamp::Timestamp;
