//! Error types for registry construction and engine misuse.
//!
//! Wrong answers are never errors: they come back as an [`Outcome`] plus
//! feedback text. `QuizError` covers bad datasets, bad settings, and callers
//! feeding the wrong answer shape to a game.
//!
//! [`Outcome`]: crate::quiz_engine::models::Outcome

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    /// The dataset contained no elements.
    #[error("element registry is empty")]
    EmptyRegistry,

    /// A record failed validation (non-positive mass, missing group, ...).
    #[error("invalid element record {symbol}: {reason}")]
    InvalidRecord { symbol: String, reason: String },

    /// Two records share a symbol, name, or atomic number.
    #[error("duplicate element: {0}")]
    DuplicateElement(String),

    /// Two records map to the same grid cell.
    #[error("elements {first} and {second} both occupy cell ({row}, {column})")]
    PositionCollision {
        row: u8,
        column: u8,
        first: String,
        second: String,
    },

    /// A dataset line could not be parsed.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("invalid quiz settings: {0}")]
    InvalidConfig(String),

    /// The answer shape does not match the active game (e.g. a grid cell
    /// submitted to the mass quiz).
    #[error("expected {expected} answer, got {got}")]
    AnswerKindMismatch {
        expected: &'static str,
        got: &'static str,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
