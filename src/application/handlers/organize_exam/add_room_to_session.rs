//! AddRoomToSessionHandler - Command handler for appending a room to a session.

use std::sync::Arc;

use crate::domain::organize_exam::{validation, OrganizeExam, OrganizeExamError, RoomRequest};
use crate::ports::OrganizeExamRepository;

use super::update_with_retry::update_with_retry;

/// Command to add a room to a session.
#[derive(Debug, Clone)]
pub struct AddRoomToSessionCommand {
    pub exam_id: String,
    pub session_id: String,
    pub room: RoomRequest,
}

/// Handler for adding rooms.
pub struct AddRoomToSessionHandler {
    repository: Arc<dyn OrganizeExamRepository>,
}

impl AddRoomToSessionHandler {
    pub fn new(repository: Arc<dyn OrganizeExamRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AddRoomToSessionCommand) -> Result<OrganizeExam, OrganizeExamError> {
        let validated = validation::validate_room(&cmd.exam_id, &cmd.session_id, cmd.room)?;

        let (exam, ()) = update_with_retry(self.repository.as_ref(), &validated.exam_id, |exam| {
            exam.add_room_to_session(&validated.session_id, validated.room.clone())?;
            Ok(())
        })
        .await?;

        tracing::info!(
            exam_id = %exam.id(),
            session_id = %validated.session_id,
            room_id = %validated.room.room_id,
            "Room added to session"
        );
        Ok(exam)
    }
}
