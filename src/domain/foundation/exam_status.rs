//! ExamStatus enum for organized exams.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Publication status of an organized exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExamStatus {
    Active,
    Inactive,
    #[default]
    Draft,
}

impl ExamStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamStatus::Active => "active",
            ExamStatus::Inactive => "inactive",
            ExamStatus::Draft => "draft",
        }
    }
}

impl fmt::Display for ExamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExamStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(ExamStatus::Active),
            "inactive" => Ok(ExamStatus::Inactive),
            "draft" => Ok(ExamStatus::Draft),
            _ => Err(ValidationError::InvalidExamStatus),
        }
    }
}
