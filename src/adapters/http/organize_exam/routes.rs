//! HTTP routes for organize exam endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    add_candidates_to_room, add_room_to_session, add_session, create_organize_exam,
    get_organize_exam, list_organize_exams, OrganizeExamHandlers,
};

/// Creates the organize exam router; nest it under `/api/organize-exams`.
pub fn organize_exam_routes(handlers: OrganizeExamHandlers) -> Router {
    Router::new()
        .route("/", post(create_organize_exam).get(list_organize_exams))
        .route("/:exam_id", get(get_organize_exam))
        .route("/:exam_id/sessions", post(add_session))
        .route("/:exam_id/sessions/:session_id/rooms", post(add_room_to_session))
        .route(
            "/:exam_id/sessions/:session_id/rooms/:room_id/candidates",
            post(add_candidates_to_room),
        )
        .with_state(handlers)
}
