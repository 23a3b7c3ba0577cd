//! ListOrganizeExams - Query handler for listing every exam, newest first.

use std::sync::Arc;

use crate::domain::organize_exam::{OrganizeExam, OrganizeExamError};
use crate::ports::OrganizeExamRepository;

/// Handler for listing exams.
pub struct ListOrganizeExamsHandler {
    repository: Arc<dyn OrganizeExamRepository>,
}

impl ListOrganizeExamsHandler {
    pub fn new(repository: Arc<dyn OrganizeExamRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<OrganizeExam>, OrganizeExamError> {
        let exams = self.repository.find_all().await?;
        tracing::debug!(count = exams.len(), "Listed organize exams");
        Ok(exams)
    }
}
