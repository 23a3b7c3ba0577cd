//! Test doubles shared by the handler tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::adapters::memory::InMemoryOrganizeExamRepository;
use crate::domain::foundation::{OrganizeExamId, Timestamp};
use crate::domain::organize_exam::{
    validation, ExamRequest, OrganizeExam, OrganizeExamDraft, SessionRequest,
};
use crate::ports::{OrganizeExamRepository, RepositoryError};

pub(crate) fn exam_request(name: &str) -> ExamRequest {
    ExamRequest {
        name: name.to_string(),
        duration_minutes: 90,
        total_questions: 50,
        max_score: 100,
        subject_id: "67e4a6cc9913e04c3885d7e9".to_string(),
        question_bank_id: "67e4b0ebba3467f00ba22ddc".to_string(),
        exam_type: "Active".to_string(),
        matrix_id: Some(String::new()),
        exam_templates: vec!["Exam1".to_string(), "Exam2".to_string()],
        status: "active".to_string(),
    }
}

pub(crate) fn session_request(name: &str) -> SessionRequest {
    SessionRequest {
        name: name.to_string(),
        active_at: Timestamp::now().plus_days(10),
        status: "Active".to_string(),
    }
}

/// Inserts a valid exam directly through the repository.
pub(crate) async fn seed_exam(repo: &dyn OrganizeExamRepository) -> OrganizeExam {
    let validated = validation::validate_exam(exam_request("Lịch sử 10")).unwrap();
    repo.insert_one(OrganizeExamDraft::from(validated))
        .await
        .unwrap()
}

/// Repository whose every call fails as if the database were down.
pub(crate) struct UnavailableRepository;

#[async_trait]
impl OrganizeExamRepository for UnavailableRepository {
    async fn insert_one(&self, _draft: OrganizeExamDraft) -> Result<OrganizeExam, RepositoryError> {
        Err(RepositoryError::unavailable("Simulated outage"))
    }

    async fn find_by_id(&self, _id: &OrganizeExamId) -> Result<Option<OrganizeExam>, RepositoryError> {
        Err(RepositoryError::unavailable("Simulated outage"))
    }

    async fn replace_by_id(
        &self,
        _id: &OrganizeExamId,
        _exam: &OrganizeExam,
    ) -> Result<Option<OrganizeExam>, RepositoryError> {
        Err(RepositoryError::unavailable("Simulated outage"))
    }

    async fn find_all(&self) -> Result<Vec<OrganizeExam>, RepositoryError> {
        Err(RepositoryError::unavailable("Simulated outage"))
    }
}

/// Wraps the in-memory repository and loses the first `conflicts` replaces.
pub(crate) struct ConflictingRepository {
    inner: InMemoryOrganizeExamRepository,
    conflicts: AtomicUsize,
    replace_calls: AtomicUsize,
}

impl ConflictingRepository {
    pub(crate) fn new(inner: InMemoryOrganizeExamRepository, conflicts: usize) -> Self {
        Self {
            inner,
            conflicts: AtomicUsize::new(conflicts),
            replace_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn replace_calls(&self) -> usize {
        self.replace_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrganizeExamRepository for ConflictingRepository {
    async fn insert_one(&self, draft: OrganizeExamDraft) -> Result<OrganizeExam, RepositoryError> {
        self.inner.insert_one(draft).await
    }

    async fn find_by_id(&self, id: &OrganizeExamId) -> Result<Option<OrganizeExam>, RepositoryError> {
        self.inner.find_by_id(id).await
    }

    async fn replace_by_id(
        &self,
        id: &OrganizeExamId,
        exam: &OrganizeExam,
    ) -> Result<Option<OrganizeExam>, RepositoryError> {
        self.replace_calls.fetch_add(1, Ordering::SeqCst);
        let remaining = self.conflicts.load(Ordering::SeqCst);
        if remaining > 0 {
            self.conflicts.store(remaining - 1, Ordering::SeqCst);
            return Err(RepositoryError::VersionConflict {
                id: id.clone(),
                expected: exam.version(),
            });
        }
        self.inner.replace_by_id(id, exam).await
    }

    async fn find_all(&self) -> Result<Vec<OrganizeExam>, RepositoryError> {
        self.inner.find_all().await
    }
}
