//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers load, mutate and conditionally replace the aggregate;
//! query handlers only read.

pub mod handlers;

pub use handlers::{
    AddCandidatesToRoomCommand, AddCandidatesToRoomHandler, AddCandidatesToRoomResult,
    AddRoomToSessionCommand, AddRoomToSessionHandler,
    AddSessionCommand, AddSessionHandler, AddSessionResult,
    CreateOrganizeExamHandler,
    GetOrganizeExamHandler, GetOrganizeExamQuery,
    ListOrganizeExamsHandler,
};
