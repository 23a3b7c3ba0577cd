//! CreateOrganizeExamHandler - Command handler for creating organized exams.

use std::sync::Arc;

use crate::domain::organize_exam::{
    validation, ExamRequest, OrganizeExam, OrganizeExamDraft, OrganizeExamError,
};
use crate::ports::OrganizeExamRepository;

/// Handler for creating organized exams.
pub struct CreateOrganizeExamHandler {
    repository: Arc<dyn OrganizeExamRepository>,
}

impl CreateOrganizeExamHandler {
    pub fn new(repository: Arc<dyn OrganizeExamRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, request: ExamRequest) -> Result<OrganizeExam, OrganizeExamError> {
        // 1. Validate (no store access on failure)
        let validated = validation::validate_exam(request)?;

        // 2. Persist; the store assigns the id
        let exam = self
            .repository
            .insert_one(OrganizeExamDraft::from(validated))
            .await?;

        tracing::info!(exam_id = %exam.id(), name = exam.name(), "Organize exam created");
        Ok(exam)
    }
}
