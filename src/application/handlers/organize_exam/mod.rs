//! Organize exam command and query handlers.

mod add_candidates_to_room;
mod add_room_to_session;
mod add_session;
mod create_organize_exam;
mod get_organize_exam;
mod list_organize_exams;
mod update_with_retry;

pub use add_candidates_to_room::{
    AddCandidatesToRoomCommand, AddCandidatesToRoomHandler, AddCandidatesToRoomResult,
};
pub use add_room_to_session::{AddRoomToSessionCommand, AddRoomToSessionHandler};
pub use add_session::{AddSessionCommand, AddSessionHandler, AddSessionResult};
pub use create_organize_exam::CreateOrganizeExamHandler;
pub use get_organize_exam::{GetOrganizeExamHandler, GetOrganizeExamQuery};
pub use list_organize_exams::ListOrganizeExamsHandler;
pub use update_with_retry::MAX_UPDATE_ATTEMPTS;

#[cfg(test)]
pub(crate) mod test_support;
