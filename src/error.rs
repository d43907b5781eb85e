//! Errors of the picker.

use thiserror::Error;

use crate::schedule::models::CourseKey;

#[derive(Debug, Error)]
pub enum Error {
    /// Request couldn't be sent or its body couldn't be read
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("{url} answered {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Schedule document isn't the expected JSON
    #[error("Invalid schedule document: {0}")]
    Decode(#[from] serde_json::Error),

    /// Selecting the course would overlap with an already selected one
    #[error("{id} conflicts with {}", .with.join(", "))]
    Conflict { id: String, with: Vec<String> },

    #[error("No course with key {0} in the schedule")]
    UnknownCourse(CourseKey),

    #[error("No course {0:?} in the schedule")]
    UnknownCourseId(String),

    #[error("Unknown term: {0:?} (expected Fall, Winter or Spring)")]
    UnknownTerm(String),

    #[error("No schedule loaded yet")]
    NotLoaded,

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl Error {
    /// Returns true if the error only refuses a user action
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            Error::Conflict { .. } | Error::UnknownCourse(_) | Error::UnknownCourseId(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
