//! Request validators.
//!
//! Each validator is pure and synchronous. Rules are checked in a fixed order
//! and the first violation is returned; callers must not expect every problem
//! to be reported. On success the validator hands back typed values so later
//! layers never re-check raw input.

use crate::domain::foundation::{
    ExamStatus, OrganizeExamId, RoomId, SessionId, SessionStatus, Timestamp, ValidationError,
};

use super::requests::{CandidateRequest, ExamRequest, RoomRequest, SessionRequest};

// Field labels double as the leading word of the contract messages.
const ORGANIZE_EXAM_NAME: &str = "OrganizeExamName";
const DURATION: &str = "Duration";
const TOTAL_QUESTIONS: &str = "TotalQuestions";
const MAX_SCORE: &str = "MaxScore";
const EXAM_ID: &str = "Exam ID";
const SESSION_NAME: &str = "SessionName";
const ACTIVE_AT: &str = "ActiveAt";
const SESSION_ID: &str = "Session ID";
const ROOM_ID_FOR_ROOM: &str = "RoomId";
const ROOM_ID_FOR_CANDIDATES: &str = "Room ID";
const SUPERVISOR_IDS: &str = "SupervisorIds";
const CANDIDATE_IDS: &str = "CandidateIds";

/// Exam fields that passed every create rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedExam {
    pub name: String,
    pub duration_minutes: u32,
    pub total_questions: u32,
    pub max_score: u32,
    pub subject_id: String,
    pub question_bank_id: String,
    pub exam_type: String,
    pub matrix_id: Option<String>,
    pub exam_templates: Vec<String>,
    pub status: ExamStatus,
}

/// Session payload ready to be appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub name: String,
    pub active_at: Timestamp,
    pub status: SessionStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSession {
    pub exam_id: OrganizeExamId,
    pub session: NewSession,
}

/// Room payload ready to be appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    pub room_id: RoomId,
    pub supervisor_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRoom {
    pub exam_id: OrganizeExamId,
    pub session_id: SessionId,
    pub room: NewRoom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCandidates {
    pub exam_id: OrganizeExamId,
    pub session_id: SessionId,
    pub room_id: RoomId,
    pub candidate_ids: Vec<String>,
}

/// Create-exam rules: name → duration → total questions → max score → status.
pub fn validate_exam(request: ExamRequest) -> Result<ValidatedExam, ValidationError> {
    let name = require_text(request.name, ORGANIZE_EXAM_NAME)?;
    let duration_minutes = require_positive(request.duration_minutes, DURATION)?;
    let total_questions = require_positive(request.total_questions, TOTAL_QUESTIONS)?;
    let max_score = require_positive(request.max_score, MAX_SCORE)?;
    let status = request.status.parse::<ExamStatus>()?;

    let matrix_id = request
        .matrix_id
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());

    Ok(ValidatedExam {
        name,
        duration_minutes,
        total_questions,
        max_score,
        subject_id: request.subject_id,
        question_bank_id: request.question_bank_id,
        exam_type: request.exam_type,
        matrix_id,
        exam_templates: request.exam_templates,
        status,
    })
}

/// Add-session rules: exam id → name → status → activation strictly after `now`.
pub fn validate_session(
    exam_id: &str,
    request: SessionRequest,
    now: Timestamp,
) -> Result<ValidatedSession, ValidationError> {
    let exam_id = OrganizeExamId::from_string(require_text(exam_id, EXAM_ID)?);
    let name = require_text(request.name, SESSION_NAME)?;
    let status = request.status.parse::<SessionStatus>()?;
    if !request.active_at.is_after(&now) {
        return Err(ValidationError::not_in_future(ACTIVE_AT));
    }

    Ok(ValidatedSession {
        exam_id,
        session: NewSession {
            name,
            active_at: request.active_at,
            status,
        },
    })
}

/// Add-room rules: exam id → session id → room id → supervisors.
pub fn validate_room(
    exam_id: &str,
    session_id: &str,
    request: RoomRequest,
) -> Result<ValidatedRoom, ValidationError> {
    let exam_id = OrganizeExamId::from_string(require_text(exam_id, EXAM_ID)?);
    let session_id = SessionId::from_string(require_text(session_id, SESSION_ID)?);
    let room_id = RoomId::from_string(require_text(request.room_id, ROOM_ID_FOR_ROOM)?);
    let supervisor_ids = require_ids(request.supervisor_ids, SUPERVISOR_IDS)?;

    Ok(ValidatedRoom {
        exam_id,
        session_id,
        room: NewRoom {
            room_id,
            supervisor_ids,
        },
    })
}

/// Add-candidates rules: exam id → session id → room id → candidates.
pub fn validate_candidates(
    exam_id: &str,
    session_id: &str,
    room_id: &str,
    request: CandidateRequest,
) -> Result<ValidatedCandidates, ValidationError> {
    let exam_id = OrganizeExamId::from_string(require_text(exam_id, EXAM_ID)?);
    let session_id = SessionId::from_string(require_text(session_id, SESSION_ID)?);
    let room_id = RoomId::from_string(require_text(room_id, ROOM_ID_FOR_CANDIDATES)?);
    let candidate_ids = require_ids(request.candidate_ids, CANDIDATE_IDS)?;

    Ok(ValidatedCandidates {
        exam_id,
        session_id,
        room_id,
        candidate_ids,
    })
}

/// Lookup rule: the exam id must be non-blank.
pub fn validate_exam_id(exam_id: &str) -> Result<OrganizeExamId, ValidationError> {
    Ok(OrganizeExamId::from_string(require_text(exam_id, EXAM_ID)?))
}

// ─────────────────────────────────────────────────────────────────────────────
// Rule helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Whitespace-only text counts as empty. Returns the trimmed value.
fn require_text(value: impl AsRef<str>, field: &str) -> Result<String, ValidationError> {
    let trimmed = value.as_ref().trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

fn require_positive(value: i32, field: &str) -> Result<u32, ValidationError> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| ValidationError::not_positive(field))
}

/// The list must be non-empty and every entry non-blank. Entries are trimmed.
fn require_ids(ids: Vec<String>, field: &str) -> Result<Vec<String>, ValidationError> {
    if ids.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    ids.into_iter().map(|id| require_text(id, field)).collect()
}
