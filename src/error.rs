//! Error types for the mindgauge scoring engine

use thiserror::Error;

/// Errors that can occur while scoring
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("Answer {answer} is out of range for question '{question_id}'")]
    OutOfRange { question_id: String, answer: i64 },

    #[error("Scenario question '{0}' declares no options")]
    MissingOptions(String),

    #[error("Unknown sub-label: {0}")]
    UnknownSubLabel(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}
