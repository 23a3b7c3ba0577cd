//! Organize exam repository port.
//!
//! The repository is the only component that talks to the store and the only
//! one that knows how identifiers are generated. It persists whole aggregates.
//!
//! # Concurrency
//!
//! `replace_by_id` is conditional on the version the caller read. Two writers
//! that read the same version cannot both succeed: the loser receives
//! `RepositoryError::VersionConflict` and must re-read before retrying.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::OrganizeExamId;
use crate::domain::organize_exam::{OrganizeExam, OrganizeExamDraft, OrganizeExamError};

/// Errors that can occur during repository operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Version conflict on organize exam {id}: expected version {expected}")]
    VersionConflict { id: OrganizeExamId, expected: u64 },
}

impl RepositoryError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        RepositoryError::Unavailable(message.into())
    }
}

impl From<RepositoryError> for OrganizeExamError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Unavailable(msg) => OrganizeExamError::StoreUnavailable(msg),
            RepositoryError::VersionConflict { id, .. } => OrganizeExamError::Conflict(id),
        }
    }
}

/// Repository port for OrganizeExam aggregate persistence.
#[async_trait]
pub trait OrganizeExamRepository: Send + Sync {
    /// Insert a new exam. The store assigns the identifier.
    ///
    /// # Errors
    ///
    /// - `Unavailable` on persistence failure
    async fn insert_one(&self, draft: OrganizeExamDraft) -> Result<OrganizeExam, RepositoryError>;

    /// Find an exam by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &OrganizeExamId) -> Result<Option<OrganizeExam>, RepositoryError>;

    /// Replace the stored document if it is still at `exam.version()`.
    ///
    /// Returns the stored revision, or `None` if the id does not exist.
    ///
    /// # Errors
    ///
    /// - `VersionConflict` if another writer got there first
    /// - `Unavailable` on persistence failure
    async fn replace_by_id(
        &self,
        id: &OrganizeExamId,
        exam: &OrganizeExam,
    ) -> Result<Option<OrganizeExam>, RepositoryError>;

    /// All exams, most recently created first.
    async fn find_all(&self) -> Result<Vec<OrganizeExam>, RepositoryError>;
}
