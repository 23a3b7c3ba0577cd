//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresOrganizeExamRepository` - One JSONB document row per exam,
//!   replaced under a version check

mod organize_exam_repository;

pub use organize_exam_repository::PostgresOrganizeExamRepository;
