//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod organize_exam;

pub use organize_exam::{
    // Commands
    AddCandidatesToRoomCommand, AddCandidatesToRoomHandler, AddCandidatesToRoomResult,
    AddRoomToSessionCommand, AddRoomToSessionHandler,
    AddSessionCommand, AddSessionHandler, AddSessionResult,
    CreateOrganizeExamHandler,
    // Queries
    GetOrganizeExamHandler, GetOrganizeExamQuery,
    ListOrganizeExamsHandler,
    MAX_UPDATE_ATTEMPTS,
};
