//! PostgreSQL implementation of OrganizeExamRepository.
//!
//! Each aggregate is one row: a JSONB document holding the full
//! exam → session → room tree, next to a few scalar columns used for
//! listing and for the version-conditional update.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::domain::foundation::OrganizeExamId;
use crate::domain::organize_exam::{OrganizeExam, OrganizeExamDraft};
use crate::ports::{OrganizeExamRepository, RepositoryError};

/// PostgreSQL implementation of OrganizeExamRepository.
#[derive(Clone)]
pub struct PostgresOrganizeExamRepository {
    pool: PgPool,
}

impl PostgresOrganizeExamRepository {
    /// Creates a new PostgresOrganizeExamRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrganizeExamRepository for PostgresOrganizeExamRepository {
    async fn insert_one(&self, draft: OrganizeExamDraft) -> Result<OrganizeExam, RepositoryError> {
        let exam = draft.into_exam(OrganizeExamId::generate());

        sqlx::query(
            r#"
            INSERT INTO organize_exams (
                id, name, status, document, version, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(exam.id().as_str())
        .bind(exam.name())
        .bind(exam.status().as_str())
        .bind(Json(&exam))
        .bind(version_to_i64(exam.version())?)
        .bind(exam.created_at().as_datetime())
        .bind(exam.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| store_error("Failed to insert organize exam", e))?;

        tracing::debug!(exam_id = %exam.id(), "Inserted organize exam");
        Ok(exam)
    }

    async fn find_by_id(&self, id: &OrganizeExamId) -> Result<Option<OrganizeExam>, RepositoryError> {
        let row = sqlx::query("SELECT document FROM organize_exams WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("Failed to fetch organize exam", e))?;

        row.map(row_to_exam).transpose()
    }

    async fn replace_by_id(
        &self,
        id: &OrganizeExamId,
        exam: &OrganizeExam,
    ) -> Result<Option<OrganizeExam>, RepositoryError> {
        let next = exam.next_revision();

        let result = sqlx::query(
            r#"
            UPDATE organize_exams SET
                name = $3,
                status = $4,
                document = $5,
                version = $6,
                updated_at = $7
            WHERE id = $1 AND version = $2
            "#,
        )
        .bind(id.as_str())
        .bind(version_to_i64(exam.version())?)
        .bind(next.name())
        .bind(next.status().as_str())
        .bind(Json(&next))
        .bind(version_to_i64(next.version())?)
        .bind(next.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| store_error("Failed to replace organize exam", e))?;

        if result.rows_affected() == 1 {
            return Ok(Some(next));
        }

        // Nothing matched: either the row is gone or its version moved on.
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM organize_exams WHERE id = $1)")
                .bind(id.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| store_error("Failed to check organize exam existence", e))?;

        if exists {
            tracing::debug!(exam_id = %id, expected = exam.version(), "Version conflict");
            Err(RepositoryError::VersionConflict {
                id: id.clone(),
                expected: exam.version(),
            })
        } else {
            Ok(None)
        }
    }

    async fn find_all(&self) -> Result<Vec<OrganizeExam>, RepositoryError> {
        let rows = sqlx::query("SELECT document FROM organize_exams ORDER BY created_at DESC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("Failed to list organize exams", e))?;

        rows.into_iter().map(row_to_exam).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn store_error(context: &str, e: sqlx::Error) -> RepositoryError {
    tracing::error!("{}: {}", context, e);
    RepositoryError::unavailable(format!("{}: {}", context, e))
}

fn version_to_i64(version: u64) -> Result<i64, RepositoryError> {
    i64::try_from(version)
        .map_err(|_| RepositoryError::unavailable(format!("Version out of range: {}", version)))
}

fn row_to_exam(row: sqlx::postgres::PgRow) -> Result<OrganizeExam, RepositoryError> {
    let Json(exam): Json<OrganizeExam> = row
        .try_get("document")
        .map_err(|e| store_error("Failed to decode organize exam document", e))?;
    Ok(exam)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_conversion_accepts_small_values() {
        assert_eq!(version_to_i64(7).unwrap(), 7);
    }

    #[test]
    fn version_conversion_rejects_overflow() {
        assert!(matches!(
            version_to_i64(u64::MAX),
            Err(RepositoryError::Unavailable(_))
        ));
    }

    #[test]
    fn store_error_keeps_context() {
        let err = store_error("Failed to fetch organize exam", sqlx::Error::PoolTimedOut);
        assert!(err.to_string().contains("Failed to fetch organize exam"));
    }
}
