//! AddSessionHandler - Command handler for appending a session to an exam.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::organize_exam::{validation, OrganizeExam, OrganizeExamError, SessionRequest};
use crate::ports::OrganizeExamRepository;

use super::update_with_retry::update_with_retry;

/// Command to add a session to an exam.
#[derive(Debug, Clone)]
pub struct AddSessionCommand {
    pub exam_id: String,
    pub session: SessionRequest,
}

/// Result of a successful session append.
#[derive(Debug, Clone)]
pub struct AddSessionResult {
    pub exam: OrganizeExam,
    pub session_id: SessionId,
}

/// Handler for adding sessions.
pub struct AddSessionHandler {
    repository: Arc<dyn OrganizeExamRepository>,
}

impl AddSessionHandler {
    pub fn new(repository: Arc<dyn OrganizeExamRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AddSessionCommand) -> Result<AddSessionResult, OrganizeExamError> {
        // 1. Validate against the server clock
        let validated = validation::validate_session(&cmd.exam_id, cmd.session, Timestamp::now())?;

        // 2. Load, append, persist
        let (exam, session_id) =
            update_with_retry(self.repository.as_ref(), &validated.exam_id, |exam| {
                Ok(exam.add_session(validated.session.clone()).id().clone())
            })
            .await?;

        tracing::info!(
            exam_id = %exam.id(),
            session_id = %session_id,
            "Session added to organize exam"
        );
        Ok(AddSessionResult { exam, session_id })
    }
}
