//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, statuses, timestamps, errors)
//! - `organize_exam` - Exam aggregate, request validators and mutations

pub mod foundation;
pub mod organize_exam;
