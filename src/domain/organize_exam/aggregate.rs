//! OrganizeExam aggregate.
//!
//! The exam owns its sessions, each session owns its rooms, and each room
//! owns its supervisor and candidate lists. The whole tree is persisted as
//! one document, so every mutation goes through this type.
//!
//! # Invariants
//!
//! - `duration_minutes`, `total_questions` and `max_score` are > 0
//! - children are only ever appended, never removed or reordered
//! - candidate ids within a room are unique
//! - `version` increases by one on every persisted replace

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ExamStatus, OrganizeExamId, RoomId, SessionId, SessionStatus, Timestamp,
};

use super::errors::OrganizeExamError;
use super::validation::{NewRoom, NewSession, ValidatedExam};

/// A validated exam that has not been given an identifier yet.
///
/// Identifiers are minted by the repository on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizeExamDraft {
    name: String,
    duration_minutes: u32,
    total_questions: u32,
    max_score: u32,
    subject_id: String,
    question_bank_id: String,
    exam_type: String,
    matrix_id: Option<String>,
    exam_templates: Vec<String>,
    status: ExamStatus,
}

impl From<ValidatedExam> for OrganizeExamDraft {
    fn from(exam: ValidatedExam) -> Self {
        Self {
            name: exam.name,
            duration_minutes: exam.duration_minutes,
            total_questions: exam.total_questions,
            max_score: exam.max_score,
            subject_id: exam.subject_id,
            question_bank_id: exam.question_bank_id,
            exam_type: exam.exam_type,
            matrix_id: exam.matrix_id,
            exam_templates: exam.exam_templates,
            status: exam.status,
        }
    }
}

impl OrganizeExamDraft {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Turns the draft into the first persisted revision of the aggregate.
    pub fn into_exam(self, id: OrganizeExamId) -> OrganizeExam {
        let now = Timestamp::now();
        OrganizeExam {
            id,
            name: self.name,
            duration_minutes: self.duration_minutes,
            total_questions: self.total_questions,
            max_score: self.max_score,
            subject_id: self.subject_id,
            question_bank_id: self.question_bank_id,
            exam_type: self.exam_type,
            matrix_id: self.matrix_id,
            exam_templates: self.exam_templates,
            status: self.status,
            sessions: Vec::new(),
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Root aggregate for one administered exam event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizeExam {
    id: OrganizeExamId,
    name: String,
    duration_minutes: u32,
    total_questions: u32,
    max_score: u32,
    subject_id: String,
    question_bank_id: String,
    exam_type: String,
    matrix_id: Option<String>,
    exam_templates: Vec<String>,
    status: ExamStatus,
    sessions: Vec<ExamSession>,
    version: u64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

/// A scheduled activation window of an exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamSession {
    id: SessionId,
    name: String,
    active_at: Timestamp,
    status: SessionStatus,
    rooms: Vec<SessionRoom>,
}

/// A venue within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRoom {
    id: RoomId,
    supervisor_ids: Vec<String>,
    candidate_ids: Vec<String>,
}

impl OrganizeExam {
    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &OrganizeExamId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn question_bank_id(&self) -> &str {
        &self.question_bank_id
    }

    pub fn exam_type(&self) -> &str {
        &self.exam_type
    }

    pub fn matrix_id(&self) -> Option<&str> {
        self.matrix_id.as_deref()
    }

    pub fn exam_templates(&self) -> &[String] {
        &self.exam_templates
    }

    pub fn status(&self) -> ExamStatus {
        self.status
    }

    pub fn sessions(&self) -> &[ExamSession] {
        &self.sessions
    }

    /// Returns the session with the given id, if any.
    pub fn session(&self, session_id: &SessionId) -> Option<&ExamSession> {
        self.sessions.iter().find(|s| &s.id == session_id)
    }

    /// Version this copy was read at.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a new session with a fresh id and no rooms.
    pub fn add_session(&mut self, new_session: NewSession) -> &ExamSession {
        self.sessions.push(ExamSession {
            id: SessionId::generate(),
            name: new_session.name,
            active_at: new_session.active_at,
            status: new_session.status,
            rooms: Vec::new(),
        });
        self.touch();
        &self.sessions[self.sessions.len() - 1]
    }

    /// Append a room to an existing session.
    ///
    /// Supervisor ids repeated within the request are collapsed to their
    /// first occurrence, so the stored list may be shorter than the input.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the session is not part of this exam
    pub fn add_room_to_session(
        &mut self,
        session_id: &SessionId,
        new_room: NewRoom,
    ) -> Result<&SessionRoom, OrganizeExamError> {
        let session = self.session_mut(session_id)?;
        let mut supervisor_ids = Vec::with_capacity(new_room.supervisor_ids.len());
        merge_unique(&mut supervisor_ids, new_room.supervisor_ids);
        session.rooms.push(SessionRoom {
            id: new_room.room_id,
            supervisor_ids,
            candidate_ids: Vec::new(),
        });
        self.touch();

        let session = self.session_mut(session_id)?;
        Ok(&session.rooms[session.rooms.len() - 1])
    }

    /// Merge candidate ids into a room. Ids already present are skipped.
    ///
    /// Returns how many ids were actually added. When nothing is added the
    /// exam is left untouched, `updated_at` included.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the session or the room cannot be resolved
    pub fn add_candidates_to_room(
        &mut self,
        session_id: &SessionId,
        room_id: &RoomId,
        candidate_ids: Vec<String>,
    ) -> Result<usize, OrganizeExamError> {
        let room = self
            .session_mut(session_id)?
            .rooms
            .iter_mut()
            .find(|r| &r.id == room_id)
            .ok_or_else(|| OrganizeExamError::room_not_found(room_id))?;

        let added = merge_unique(&mut room.candidate_ids, candidate_ids);
        if added > 0 {
            self.touch();
        }
        Ok(added)
    }

    /// Copy stored after a successful version-checked replace.
    pub fn next_revision(&self) -> Self {
        let mut next = self.clone();
        next.version += 1;
        next
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn session_mut(&mut self, session_id: &SessionId) -> Result<&mut ExamSession, OrganizeExamError> {
        self.sessions
            .iter_mut()
            .find(|s| &s.id == session_id)
            .ok_or_else(|| OrganizeExamError::session_not_found(session_id))
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

impl ExamSession {
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn active_at(&self) -> &Timestamp {
        &self.active_at
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn rooms(&self) -> &[SessionRoom] {
        &self.rooms
    }

    /// Returns the first room with the given id, if any.
    pub fn room(&self, room_id: &RoomId) -> Option<&SessionRoom> {
        self.rooms.iter().find(|r| &r.id == room_id)
    }
}

impl SessionRoom {
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn supervisor_ids(&self) -> &[String] {
        &self.supervisor_ids
    }

    pub fn candidate_ids(&self) -> &[String] {
        &self.candidate_ids
    }
}

/// Order-preserving set union. Returns the number of ids appended.
fn merge_unique(target: &mut Vec<String>, ids: Vec<String>) -> usize {
    let before = target.len();
    for id in ids {
        if !target.contains(&id) {
            target.push(id);
        }
    }
    target.len() - before
}
