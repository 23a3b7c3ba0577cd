//! Organize exam domain module.
//!
//! An organized exam is the root aggregate of a scheduling tree:
//! exam → sessions → rooms → supervisors/candidates. The tree only grows;
//! no operation here removes or reorders children.
//!
//! # Flow
//!
//! 1. A raw request (`requests`) is checked by a pure validator (`validation`),
//!    which yields typed, trusted values or the first violated rule.
//! 2. The aggregate (`aggregate`) applies the validated change in memory.
//! 3. The application layer persists the result through the repository port.

mod aggregate;
mod errors;
mod requests;
pub mod validation;

pub use aggregate::{ExamSession, OrganizeExam, OrganizeExamDraft, SessionRoom};
pub use errors::{EntityKind, OrganizeExamError};
pub use requests::{CandidateRequest, ExamRequest, RoomRequest, SessionRequest};
pub use validation::{
    NewRoom, NewSession, ValidatedCandidates, ValidatedExam, ValidatedRoom, ValidatedSession,
};
