//! GetOrganizeExam - Query handler for reading one exam with its sessions.

use std::sync::Arc;

use crate::domain::organize_exam::{validation, OrganizeExam, OrganizeExamError};
use crate::ports::OrganizeExamRepository;

/// Query to fetch an organize exam by id.
#[derive(Debug, Clone)]
pub struct GetOrganizeExamQuery {
    pub exam_id: String,
}

/// Handler for getting a single exam.
pub struct GetOrganizeExamHandler {
    repository: Arc<dyn OrganizeExamRepository>,
}

impl GetOrganizeExamHandler {
    pub fn new(repository: Arc<dyn OrganizeExamRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetOrganizeExamQuery) -> Result<OrganizeExam, OrganizeExamError> {
        let exam_id = validation::validate_exam_id(&query.exam_id)?;

        self.repository
            .find_by_id(&exam_id)
            .await?
            .ok_or_else(|| OrganizeExamError::exam_not_found(&exam_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryOrganizeExamRepository;
    use crate::application::handlers::organize_exam::test_support::{seed_exam, UnavailableRepository};
    use crate::domain::foundation::ErrorCode;

    fn query(exam_id: &str) -> GetOrganizeExamQuery {
        GetOrganizeExamQuery {
            exam_id: exam_id.to_string(),
        }
    }

    #[tokio::test]
    async fn returns_stored_exam() {
        let repo = Arc::new(InMemoryOrganizeExamRepository::new());
        let seeded = seed_exam(repo.as_ref()).await;
        let handler = GetOrganizeExamHandler::new(repo);

        let exam = handler.handle(query(seeded.id().as_str())).await.unwrap();

        assert_eq!(exam, seeded);
    }

    #[tokio::test]
    async fn empty_id_is_rejected() {
        let handler = GetOrganizeExamHandler::new(Arc::new(InMemoryOrganizeExamRepository::new()));
        let err = handler.handle(query(" ")).await.unwrap_err();
        assert_eq!(err.to_string(), "Exam ID cannot be empty");
    }

    #[tokio::test]
    async fn missing_exam_is_not_found() {
        let handler = GetOrganizeExamHandler::new(Arc::new(InMemoryOrganizeExamRepository::new()));
        let err = handler.handle(query("missing")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::OrganizeExamNotFound);
        assert_eq!(err.to_string(), "Organize exam not found: missing");
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_unavailable() {
        let handler = GetOrganizeExamHandler::new(Arc::new(UnavailableRepository));
        let err = handler.handle(query("exam123")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::StoreUnavailable);
    }
}
