//! Error types for catalog maintenance and record ingestion.
//!
//! The search itself never fails; every error here is raised at insert or
//! parse time, before a snapshot reaches the generator.

use thiserror::Error;

use crate::models::SectionToken;
use crate::validation::ValidationError;

/// Convenience alias used across the crate.
pub type Result<T, E = TimetableError> = std::result::Result<T, E>;

/// Errors raised while building or editing course catalogs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimetableError {
    /// A section with the same code already exists in the course.
    #[error("section {code} already exists in course {course}")]
    DuplicateSection {
        /// Course that rejected the insert.
        course: String,
        /// Colliding section code.
        code: String,
    },

    /// No course with the given name exists in the catalog.
    #[error("course not found: {0}")]
    CourseNotFound(String),

    /// No section with the given token exists in the course.
    #[error("section {token} not found in course {course}")]
    SectionNotFound {
        /// Course that was searched.
        course: String,
        /// Token that was looked up.
        token: SectionToken,
    },

    /// The record failed validation.
    #[error("invalid section record: {}", join_messages(.0))]
    InvalidRecord(Vec<ValidationError>),

    /// A chat message did not mention any recognizable day.
    #[error("no days found in message; use full day names such as \"Lunes\"")]
    MissingDays,

    /// A chat message did not contain an hour range.
    #[error("no hour range found in message; use \"8 a 10\" or \"2:30pm a 4pm\"")]
    MissingHours,

    /// A timetable document could not be decoded.
    #[error("malformed timetable JSON: {0}")]
    MalformedJson(String),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<serde_json::Error> for TimetableError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedJson(err.to_string())
    }
}
