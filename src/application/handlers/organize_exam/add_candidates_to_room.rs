//! AddCandidatesToRoomHandler - Command handler for assigning candidates to a room.
//!
//! Candidate ids are merged as a set: ids already in the room are skipped,
//! so repeating the same request leaves the room unchanged.

use std::sync::Arc;

use crate::domain::organize_exam::{validation, CandidateRequest, OrganizeExam, OrganizeExamError};
use crate::ports::OrganizeExamRepository;

use super::update_with_retry::update_with_retry;

/// Command to add candidates to a room.
#[derive(Debug, Clone)]
pub struct AddCandidatesToRoomCommand {
    pub exam_id: String,
    pub session_id: String,
    pub room_id: String,
    pub candidates: CandidateRequest,
}

/// Result of a successful candidate assignment.
#[derive(Debug, Clone)]
pub struct AddCandidatesToRoomResult {
    pub exam: OrganizeExam,
    /// Number of ids that were not already assigned to the room.
    pub added: usize,
}

/// Handler for adding candidates to rooms.
pub struct AddCandidatesToRoomHandler {
    repository: Arc<dyn OrganizeExamRepository>,
}

impl AddCandidatesToRoomHandler {
    pub fn new(repository: Arc<dyn OrganizeExamRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: AddCandidatesToRoomCommand,
    ) -> Result<AddCandidatesToRoomResult, OrganizeExamError> {
        let validated = validation::validate_candidates(
            &cmd.exam_id,
            &cmd.session_id,
            &cmd.room_id,
            cmd.candidates,
        )?;

        let (exam, added) = update_with_retry(self.repository.as_ref(), &validated.exam_id, |exam| {
            exam.add_candidates_to_room(
                &validated.session_id,
                &validated.room_id,
                validated.candidate_ids.clone(),
            )
        })
        .await?;

        tracing::info!(
            exam_id = %exam.id(),
            session_id = %validated.session_id,
            room_id = %validated.room_id,
            requested = validated.candidate_ids.len(),
            added,
            "Candidates assigned to room"
        );
        Ok(AddCandidatesToRoomResult { exam, added })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryOrganizeExamRepository;
    use crate::application::handlers::organize_exam::test_support::{
        seed_exam, session_request, ConflictingRepository,
    };
    use crate::domain::foundation::{RoomId, SessionId, Timestamp};
    use crate::domain::organize_exam::{EntityKind, NewRoom};

    fn candidates(ids: &[&str]) -> CandidateRequest {
        CandidateRequest {
            candidate_ids: ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn command(exam_id: &str, session_id: &str, room_id: &str, ids: &[&str]) -> AddCandidatesToRoomCommand {
        AddCandidatesToRoomCommand {
            exam_id: exam_id.to_string(),
            session_id: session_id.to_string(),
            room_id: room_id.to_string(),
            candidates: candidates(ids),
        }
    }

    /// Exam with one session holding room "room123"; returns (exam id, session id).
    async fn exam_with_room(repo: &InMemoryOrganizeExamRepository) -> (String, SessionId) {
        let mut exam = seed_exam(repo).await;
        let validated =
            validation::validate_session(exam.id().as_str(), session_request("Morning"), Timestamp::now())
                .unwrap();
        let session_id = exam.add_session(validated.session).id().clone();
        exam.add_room_to_session(
            &session_id,
            NewRoom {
                room_id: RoomId::from_string("room123"),
                supervisor_ids: vec!["supervisor1".to_string()],
            },
        )
        .unwrap();
        repo.replace_by_id(exam.id(), &exam).await.unwrap();
        (exam.id().to_string(), session_id)
    }

    fn room_candidates(exam: &OrganizeExam, session_id: &SessionId) -> Vec<String> {
        exam.session(session_id)
            .unwrap()
            .room(&RoomId::from_string("room123"))
            .unwrap()
            .candidate_ids()
            .to_vec()
    }

    #[tokio::test]
    async fn adds_candidates_to_room() {
        let repo = Arc::new(InMemoryOrganizeExamRepository::new());
        let (exam_id, session_id) = exam_with_room(&repo).await;
        let handler = AddCandidatesToRoomHandler::new(repo.clone());

        let result = handler
            .handle(command(
                &exam_id,
                session_id.as_str(),
                "room123",
                &["candidate1", "candidate2"],
            ))
            .await
            .unwrap();

        assert_eq!(result.added, 2);
        assert_eq!(
            room_candidates(&result.exam, &session_id),
            vec!["candidate1", "candidate2"]
        );
    }

    #[tokio::test]
    async fn repeated_assignment_does_not_duplicate() {
        let repo = Arc::new(InMemoryOrganizeExamRepository::new());
        let (exam_id, session_id) = exam_with_room(&repo).await;
        let handler = AddCandidatesToRoomHandler::new(repo.clone());

        handler
            .handle(command(&exam_id, session_id.as_str(), "room123", &["candidate1"]))
            .await
            .unwrap();
        let result = handler
            .handle(command(&exam_id, session_id.as_str(), "room123", &["candidate1"]))
            .await
            .unwrap();

        assert_eq!(result.added, 0);
        assert_eq!(room_candidates(&result.exam, &session_id), vec!["candidate1"]);
    }

    #[tokio::test]
    async fn repeated_assignment_does_not_write() {
        let inner = InMemoryOrganizeExamRepository::new();
        let (exam_id, session_id) = exam_with_room(&inner).await;
        let repo = Arc::new(ConflictingRepository::new(inner, 0));
        let handler = AddCandidatesToRoomHandler::new(repo.clone());

        let first = handler
            .handle(command(&exam_id, session_id.as_str(), "room123", &["candidate1"]))
            .await
            .unwrap();
        let second = handler
            .handle(command(&exam_id, session_id.as_str(), "room123", &["candidate1"]))
            .await
            .unwrap();

        assert_eq!(repo.replace_calls(), 1);
        assert_eq!(second.exam.version(), first.exam.version());
        assert_eq!(second.exam.updated_at(), first.exam.updated_at());
    }

    #[tokio::test]
    async fn result_is_superset_of_previous_and_requested() {
        let repo = Arc::new(InMemoryOrganizeExamRepository::new());
        let (exam_id, session_id) = exam_with_room(&repo).await;
        let handler = AddCandidatesToRoomHandler::new(repo.clone());

        handler
            .handle(command(&exam_id, session_id.as_str(), "room123", &["a", "b"]))
            .await
            .unwrap();
        let result = handler
            .handle(command(&exam_id, session_id.as_str(), "room123", &["b", "c"]))
            .await
            .unwrap();

        let ids = room_candidates(&result.exam, &session_id);
        for expected in ["a", "b", "c"] {
            assert!(ids.iter().any(|id| id == expected));
        }
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn empty_exam_id_is_rejected() {
        let handler = AddCandidatesToRoomHandler::new(Arc::new(InMemoryOrganizeExamRepository::new()));
        let err = handler
            .handle(command("", "session123", "room123", &["candidate1", "candidate2"]))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Exam ID cannot be empty");
    }

    #[tokio::test]
    async fn empty_session_id_is_rejected() {
        let handler = AddCandidatesToRoomHandler::new(Arc::new(InMemoryOrganizeExamRepository::new()));
        let err = handler
            .handle(command("exam123", "", "room123", &["candidate1", "candidate2"]))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Session ID cannot be empty");
    }

    #[tokio::test]
    async fn empty_room_id_is_rejected() {
        let handler = AddCandidatesToRoomHandler::new(Arc::new(InMemoryOrganizeExamRepository::new()));
        let err = handler
            .handle(command("exam123", "session123", "", &["candidate1", "candidate2"]))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Room ID cannot be empty");
    }

    #[tokio::test]
    async fn empty_candidate_list_is_rejected() {
        let handler = AddCandidatesToRoomHandler::new(Arc::new(InMemoryOrganizeExamRepository::new()));
        let err = handler
            .handle(command("exam123", "session123", "room123", &[]))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "CandidateIds cannot be empty");
    }

    #[tokio::test]
    async fn unknown_room_is_not_found() {
        let repo = Arc::new(InMemoryOrganizeExamRepository::new());
        let (exam_id, session_id) = exam_with_room(&repo).await;
        let handler = AddCandidatesToRoomHandler::new(repo);

        let err = handler
            .handle(command(&exam_id, session_id.as_str(), "room999", &["candidate1"]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            OrganizeExamError::NotFound {
                entity: EntityKind::Room,
                ..
            }
        ));
    }
}
