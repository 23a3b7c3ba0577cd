//! Read-modify-write loop shared by the mutating handlers.
//!
//! The aggregate is re-read on every attempt, so a mutation that lost a
//! version race is re-applied to the winner's state rather than overwriting it.

use crate::domain::foundation::OrganizeExamId;
use crate::domain::organize_exam::{OrganizeExam, OrganizeExamError};
use crate::ports::{OrganizeExamRepository, RepositoryError};

/// How many times a mutation is attempted before reporting a conflict.
pub const MAX_UPDATE_ATTEMPTS: usize = 3;

/// Load the exam, apply `mutate` in memory, and persist it with a version check.
///
/// Nothing is written unless `mutate` succeeds and actually changes the exam;
/// an unchanged exam is returned as read, without a version bump. Returns the
/// stored revision together with whatever the mutation produced.
pub(crate) async fn update_with_retry<F, T>(
    repository: &dyn OrganizeExamRepository,
    exam_id: &OrganizeExamId,
    mut mutate: F,
) -> Result<(OrganizeExam, T), OrganizeExamError>
where
    F: FnMut(&mut OrganizeExam) -> Result<T, OrganizeExamError> + Send,
    T: Send,
{
    for attempt in 1..=MAX_UPDATE_ATTEMPTS {
        let mut exam = repository
            .find_by_id(exam_id)
            .await?
            .ok_or_else(|| OrganizeExamError::exam_not_found(exam_id))?;

        let before = exam.clone();
        let output = mutate(&mut exam)?;
        if exam == before {
            return Ok((exam, output));
        }

        match repository.replace_by_id(exam_id, &exam).await {
            Ok(Some(saved)) => return Ok((saved, output)),
            Ok(None) => return Err(OrganizeExamError::exam_not_found(exam_id)),
            Err(RepositoryError::VersionConflict { expected, .. }) => {
                tracing::warn!(
                    exam_id = %exam_id,
                    attempt,
                    expected_version = expected,
                    "Organize exam changed concurrently, retrying"
                );
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(OrganizeExamError::Conflict(exam_id.clone()))
}
