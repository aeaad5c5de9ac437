//! Error types for strict input parsing
//!
//! The engine itself never fails: unknown notes and scales fall back to
//! defaults. These errors only come out of the `FromStr` impls, the strict
//! query entry point and JSON export.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    #[error("Invalid note: '{0}'")]
    UnknownNote(String),

    #[error("Unknown scale: '{0}'")]
    UnknownScale(String),

    #[error("Invalid chord level: '{0}'. Expected 'seventh' or 'augmented'")]
    InvalidChordLevel(String),

    #[error("JSON serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TheoryError {
    fn from(err: serde_json::Error) -> Self {
        TheoryError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TheoryError>;
