//! In-memory adapters.
//!
//! Used by tests and by the binary when no database is configured.

mod organize_exam_repository;

pub use organize_exam_repository::InMemoryOrganizeExamRepository;
