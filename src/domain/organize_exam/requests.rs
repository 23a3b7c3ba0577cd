//! Raw request DTOs, exactly as callers submit them.
//!
//! Nothing here is trusted: numbers may be negative, strings may be empty and
//! statuses may be unrecognized. See [`super::validation`].

use crate::domain::foundation::Timestamp;

/// Request to create a new organized exam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamRequest {
    pub name: String,
    pub duration_minutes: i32,
    pub total_questions: i32,
    pub max_score: i32,
    pub subject_id: String,
    pub question_bank_id: String,
    pub exam_type: String,
    pub matrix_id: Option<String>,
    pub exam_templates: Vec<String>,
    pub status: String,
}

/// Request to append a session to an exam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRequest {
    pub name: String,
    pub active_at: Timestamp,
    pub status: String,
}

/// Request to append a room to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRequest {
    pub room_id: String,
    pub supervisor_ids: Vec<String>,
}

/// Request to add candidates to a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRequest {
    pub candidate_ids: Vec<String>,
}
