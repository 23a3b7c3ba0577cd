//! HTTP adapter for organize exam endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AddCandidatesRequest, AddRoomRequest, AddSessionRequest, CreateOrganizeExamRequest,
    ErrorResponse, OrganizeExamListResponse, OrganizeExamResponse, RoomResponse, SessionResponse,
};
pub use handlers::{health, OrganizeExamHandlers};
pub use routes::organize_exam_routes;
