//! HTTP DTOs for organize exam endpoints.
//!
//! Wire names are camelCase. Every request field is defaulted so that a
//! missing field reaches the validators and fails with its contract message
//! instead of a JSON decoding error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ErrorCode, ExamStatus, Timestamp};
use crate::domain::organize_exam::{
    CandidateRequest, ExamRequest, ExamSession, OrganizeExam, OrganizeExamError, RoomRequest,
    SessionRequest, SessionRoom,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create an organize exam.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateOrganizeExamRequest {
    pub organize_exam_name: String,
    pub duration: i32,
    pub total_questions: i32,
    pub max_score: i32,
    pub subject_id: String,
    pub question_bank_id: String,
    pub exam_type: String,
    pub matrix_id: Option<String>,
    pub exams: Vec<String>,
    pub organize_exam_status: Option<String>,
}

impl From<CreateOrganizeExamRequest> for ExamRequest {
    fn from(req: CreateOrganizeExamRequest) -> Self {
        Self {
            name: req.organize_exam_name,
            duration_minutes: req.duration,
            total_questions: req.total_questions,
            max_score: req.max_score,
            subject_id: req.subject_id,
            question_bank_id: req.question_bank_id,
            exam_type: req.exam_type,
            matrix_id: req.matrix_id,
            exam_templates: req.exams,
            status: req
                .organize_exam_status
                .unwrap_or_else(|| ExamStatus::default().as_str().to_string()),
        }
    }
}

/// Request to add a session to an exam.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddSessionRequest {
    pub session_name: String,
    /// RFC 3339 instant. Missing means "now", which the validator rejects.
    pub active_at: Option<DateTime<Utc>>,
    pub session_status: String,
}

impl From<AddSessionRequest> for SessionRequest {
    fn from(req: AddSessionRequest) -> Self {
        Self {
            name: req.session_name,
            active_at: req
                .active_at
                .map(Timestamp::from_datetime)
                .unwrap_or_else(Timestamp::now),
            status: req.session_status,
        }
    }
}

/// Request to add a room to a session.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddRoomRequest {
    pub room_id: String,
    pub supervisor_ids: Vec<String>,
}

impl From<AddRoomRequest> for RoomRequest {
    fn from(req: AddRoomRequest) -> Self {
        Self {
            room_id: req.room_id,
            supervisor_ids: req.supervisor_ids,
        }
    }
}

/// Request to assign candidates to a room.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddCandidatesRequest {
    pub candidate_ids: Vec<String>,
}

impl From<AddCandidatesRequest> for CandidateRequest {
    fn from(req: AddCandidatesRequest) -> Self {
        Self {
            candidate_ids: req.candidate_ids,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Full exam view: the aggregate with every session and room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizeExamResponse {
    pub id: String,
    pub organize_exam_name: String,
    pub duration: u32,
    pub total_questions: u32,
    pub max_score: u32,
    pub subject_id: String,
    pub question_bank_id: String,
    pub exam_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix_id: Option<String>,
    pub exams: Vec<String>,
    pub organize_exam_status: String,
    pub sessions: Vec<SessionResponse>,
    pub version: u64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&OrganizeExam> for OrganizeExamResponse {
    fn from(exam: &OrganizeExam) -> Self {
        Self {
            id: exam.id().to_string(),
            organize_exam_name: exam.name().to_string(),
            duration: exam.duration_minutes(),
            total_questions: exam.total_questions(),
            max_score: exam.max_score(),
            subject_id: exam.subject_id().to_string(),
            question_bank_id: exam.question_bank_id().to_string(),
            exam_type: exam.exam_type().to_string(),
            matrix_id: exam.matrix_id().map(str::to_string),
            exams: exam.exam_templates().to_vec(),
            organize_exam_status: exam.status().as_str().to_string(),
            sessions: exam.sessions().iter().map(Into::into).collect(),
            version: exam.version(),
            created_at: exam.created_at().as_datetime().to_rfc3339(),
            updated_at: exam.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Session inside an exam response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: String,
    pub session_name: String,
    pub active_at: String,
    pub session_status: String,
    pub rooms: Vec<RoomResponse>,
}

impl From<&ExamSession> for SessionResponse {
    fn from(session: &ExamSession) -> Self {
        Self {
            session_id: session.id().to_string(),
            session_name: session.name().to_string(),
            active_at: session.active_at().as_datetime().to_rfc3339(),
            session_status: session.status().as_str().to_string(),
            rooms: session.rooms().iter().map(Into::into).collect(),
        }
    }
}

/// Room inside a session response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub room_id: String,
    pub supervisor_ids: Vec<String>,
    pub candidate_ids: Vec<String>,
}

impl From<&SessionRoom> for RoomResponse {
    fn from(room: &SessionRoom) -> Self {
        Self {
            room_id: room.id().to_string(),
            supervisor_ids: room.supervisor_ids().to_vec(),
            candidate_ids: room.candidate_ids().to_vec(),
        }
    }
}

/// Exam listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizeExamListResponse {
    pub items: Vec<OrganizeExamResponse>,
    pub total: usize,
}

impl From<Vec<OrganizeExam>> for OrganizeExamListResponse {
    fn from(exams: Vec<OrganizeExam>) -> Self {
        let items: Vec<OrganizeExamResponse> = exams.iter().map(Into::into).collect();
        Self {
            total: items.len(),
            items,
        }
    }
}

/// Standard error response.
///
/// `code` is the `ErrorCode` of the failure; `field` names the offending
/// request field for validation failures that are scoped to one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            field: None,
        }
    }

    /// Body that could not be decoded into the request DTO.
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }
}

impl From<&OrganizeExamError> for ErrorResponse {
    fn from(error: &OrganizeExamError) -> Self {
        let field = match error {
            OrganizeExamError::Validation(v) => v.field().map(str::to_string),
            _ => None,
        };
        Self {
            field,
            ..Self::new(error.code(), error.to_string())
        }
    }
}
