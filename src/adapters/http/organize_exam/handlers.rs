//! HTTP handlers for organize exam endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::organize_exam::{
    AddCandidatesToRoomCommand, AddCandidatesToRoomHandler, AddRoomToSessionCommand,
    AddRoomToSessionHandler, AddSessionCommand, AddSessionHandler, CreateOrganizeExamHandler,
    GetOrganizeExamHandler, GetOrganizeExamQuery, ListOrganizeExamsHandler,
};
use crate::domain::foundation::ErrorCode;
use crate::domain::organize_exam::OrganizeExamError;
use crate::ports::OrganizeExamRepository;

use super::dto::{
    AddCandidatesRequest, AddRoomRequest, AddSessionRequest, CreateOrganizeExamRequest,
    ErrorResponse, OrganizeExamListResponse, OrganizeExamResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct OrganizeExamHandlers {
    create_handler: Arc<CreateOrganizeExamHandler>,
    add_session_handler: Arc<AddSessionHandler>,
    add_room_handler: Arc<AddRoomToSessionHandler>,
    add_candidates_handler: Arc<AddCandidatesToRoomHandler>,
    get_handler: Arc<GetOrganizeExamHandler>,
    list_handler: Arc<ListOrganizeExamsHandler>,
}

impl OrganizeExamHandlers {
    /// Wires every handler to the same repository.
    pub fn new(repository: Arc<dyn OrganizeExamRepository>) -> Self {
        Self {
            create_handler: Arc::new(CreateOrganizeExamHandler::new(repository.clone())),
            add_session_handler: Arc::new(AddSessionHandler::new(repository.clone())),
            add_room_handler: Arc::new(AddRoomToSessionHandler::new(repository.clone())),
            add_candidates_handler: Arc::new(AddCandidatesToRoomHandler::new(repository.clone())),
            get_handler: Arc::new(GetOrganizeExamHandler::new(repository.clone())),
            list_handler: Arc::new(ListOrganizeExamsHandler::new(repository)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/organize-exams - Create an organize exam
pub async fn create_organize_exam(
    State(handlers): State<OrganizeExamHandlers>,
    body: Result<Json<CreateOrganizeExamRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return handle_json_rejection(rejection),
    };

    match handlers.create_handler.handle(req.into()).await {
        Ok(exam) => (StatusCode::CREATED, Json(OrganizeExamResponse::from(&exam))).into_response(),
        Err(e) => handle_organize_exam_error(e),
    }
}

/// GET /api/organize-exams - List every exam
pub async fn list_organize_exams(State(handlers): State<OrganizeExamHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(exams) => (StatusCode::OK, Json(OrganizeExamListResponse::from(exams))).into_response(),
        Err(e) => handle_organize_exam_error(e),
    }
}

/// GET /api/organize-exams/:exam_id - Get one exam
pub async fn get_organize_exam(
    State(handlers): State<OrganizeExamHandlers>,
    Path(exam_id): Path<String>,
) -> Response {
    match handlers.get_handler.handle(GetOrganizeExamQuery { exam_id }).await {
        Ok(exam) => (StatusCode::OK, Json(OrganizeExamResponse::from(&exam))).into_response(),
        Err(e) => handle_organize_exam_error(e),
    }
}

/// POST /api/organize-exams/:exam_id/sessions - Add a session
pub async fn add_session(
    State(handlers): State<OrganizeExamHandlers>,
    Path(exam_id): Path<String>,
    body: Result<Json<AddSessionRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return handle_json_rejection(rejection),
    };

    let cmd = AddSessionCommand {
        exam_id,
        session: req.into(),
    };

    match handlers.add_session_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(OrganizeExamResponse::from(&result.exam))).into_response(),
        Err(e) => handle_organize_exam_error(e),
    }
}

/// POST /api/organize-exams/:exam_id/sessions/:session_id/rooms - Add a room
pub async fn add_room_to_session(
    State(handlers): State<OrganizeExamHandlers>,
    Path((exam_id, session_id)): Path<(String, String)>,
    body: Result<Json<AddRoomRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return handle_json_rejection(rejection),
    };

    let cmd = AddRoomToSessionCommand {
        exam_id,
        session_id,
        room: req.into(),
    };

    match handlers.add_room_handler.handle(cmd).await {
        Ok(exam) => (StatusCode::OK, Json(OrganizeExamResponse::from(&exam))).into_response(),
        Err(e) => handle_organize_exam_error(e),
    }
}

/// POST /api/organize-exams/:exam_id/sessions/:session_id/rooms/:room_id/candidates
pub async fn add_candidates_to_room(
    State(handlers): State<OrganizeExamHandlers>,
    Path((exam_id, session_id, room_id)): Path<(String, String, String)>,
    body: Result<Json<AddCandidatesRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return handle_json_rejection(rejection),
    };

    let cmd = AddCandidatesToRoomCommand {
        exam_id,
        session_id,
        room_id,
        candidates: req.into(),
    };

    match handlers.add_candidates_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(OrganizeExamResponse::from(&result.exam))).into_response(),
        Err(e) => handle_organize_exam_error(e),
    }
}

/// GET /health
pub async fn health() -> &'static str {
    "OK"
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

pub(crate) fn handle_organize_exam_error(error: OrganizeExamError) -> Response {
    let code = error.code();
    if code == ErrorCode::StoreUnavailable {
        tracing::error!(error = %error, "Organize exam store unavailable");
    }
    (status_for(code), Json(ErrorResponse::from(&error))).into_response()
}

/// Bodies that are not valid JSON for the DTO are reported like any other
/// validation failure.
fn handle_json_rejection(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection.body_text(), "Rejected request body");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::malformed_body(rejection.body_text())),
    )
        .into_response()
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::OrganizeExamNotFound | ErrorCode::SessionNotFound | ErrorCode::RoomNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::ConcurrentModification => StatusCode::CONFLICT,
        ErrorCode::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
    }
}
