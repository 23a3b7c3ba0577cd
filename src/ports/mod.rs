//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `OrganizeExamRepository` - Persistence of the exam aggregate

mod organize_exam_repository;

pub use organize_exam_repository::{OrganizeExamRepository, RepositoryError};
