//! In-memory implementation of OrganizeExamRepository.
//!
//! Honors the same version-conditional replace contract as the database
//! adapter, so handler retry behaviour can be exercised without PostgreSQL.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::OrganizeExamId;
use crate::domain::organize_exam::{OrganizeExam, OrganizeExamDraft};
use crate::ports::{OrganizeExamRepository, RepositoryError};

/// In-memory storage for organized exams.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrganizeExamRepository {
    exams: Arc<RwLock<HashMap<OrganizeExamId, OrganizeExam>>>,
}

impl InMemoryOrganizeExamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored exams
    pub async fn len(&self) -> usize {
        self.exams.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.exams.read().await.is_empty()
    }
}

#[async_trait]
impl OrganizeExamRepository for InMemoryOrganizeExamRepository {
    async fn insert_one(&self, draft: OrganizeExamDraft) -> Result<OrganizeExam, RepositoryError> {
        let exam = draft.into_exam(OrganizeExamId::generate());
        self.exams
            .write()
            .await
            .insert(exam.id().clone(), exam.clone());
        Ok(exam)
    }

    async fn find_by_id(&self, id: &OrganizeExamId) -> Result<Option<OrganizeExam>, RepositoryError> {
        Ok(self.exams.read().await.get(id).cloned())
    }

    async fn replace_by_id(
        &self,
        id: &OrganizeExamId,
        exam: &OrganizeExam,
    ) -> Result<Option<OrganizeExam>, RepositoryError> {
        let mut exams = self.exams.write().await;
        let Some(stored) = exams.get_mut(id) else {
            return Ok(None);
        };

        if stored.version() != exam.version() {
            return Err(RepositoryError::VersionConflict {
                id: id.clone(),
                expected: exam.version(),
            });
        }

        *stored = exam.next_revision();
        Ok(Some(stored.clone()))
    }

    async fn find_all(&self) -> Result<Vec<OrganizeExam>, RepositoryError> {
        let mut all: Vec<OrganizeExam> = self.exams.read().await.values().cloned().collect();
        all.sort_by(|a, b| {
            b.created_at()
                .cmp(a.created_at())
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });
        Ok(all)
    }
}
