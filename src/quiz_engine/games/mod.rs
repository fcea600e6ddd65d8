//! The game engines and the tagged union a driver holds on to.
//!
//! | Engine            | Answer shape            | Attempts          |
//! |-------------------|-------------------------|-------------------|
//! | `AttributeQuiz`   | free text               | `max_attempts`    |
//! | `MassQuiz`        | one of three masses     | single shot       |
//! | `PlacementQuiz`   | grid cell               | unlimited retries |

pub mod attribute;
pub mod mass;
pub mod placement;

use std::sync::Arc;

use tracing::warn;

use crate::quiz_engine::{
    display::DisplayInfo,
    error::{QuizError, Result},
    models::{Answer, ElementRecord, Outcome, QuizKind},
};

pub use attribute::{Attribute, AttributeQuiz, AttributeSelector};
pub use mass::MassQuiz;
pub use placement::PlacementQuiz;

/// One active practice session.
pub enum QuizGame {
    Attribute(AttributeQuiz),
    Mass(MassQuiz),
    Placement(PlacementQuiz),
}

impl QuizGame {
    pub fn kind(&self) -> QuizKind {
        match self {
            QuizGame::Attribute(q) => match q.selector() {
                Attribute::AtomicNumber => QuizKind::AtomicNumber,
                Attribute::Name         => QuizKind::Name,
                Attribute::Symbol       => QuizKind::Symbol,
            },
            QuizGame::Mass(_)      => QuizKind::Mass,
            QuizGame::Placement(_) => QuizKind::Placement,
        }
    }

    /// Route an answer to the active engine.
    ///
    /// Submitting the wrong answer shape (say, a grid cell to the mass quiz)
    /// is a driver bug and comes back as [`QuizError::AnswerKindMismatch`]
    /// without touching session state.
    pub fn check_answer(&mut self, answer: impl Into<Answer>) -> Result<Outcome> {
        let answer = answer.into();
        match (self, answer) {
            (QuizGame::Attribute(q), Answer::Text(text)) => Ok(q.check_answer(&text)),
            (QuizGame::Mass(q), Answer::Mass(m))         => Ok(q.check_answer(m)),
            (QuizGame::Placement(q), Answer::Position(p)) => Ok(q.check_answer(p)),
            (game, other) => {
                let expected = match game {
                    QuizGame::Attribute(_) => "text",
                    QuizGame::Mass(_)      => "mass",
                    QuizGame::Placement(_) => "position",
                };
                warn!(expected, got = other.kind_name(), "answer shape does not match game");
                Err(QuizError::AnswerKindMismatch {
                    expected,
                    got: other.kind_name(),
                })
            }
        }
    }

    pub fn display_info(&self) -> DisplayInfo {
        match self {
            QuizGame::Attribute(q) => q.display_info(),
            QuizGame::Mass(q)      => q.display_info(),
            QuizGame::Placement(q) => q.display_info(),
        }
    }

    /// Feedback for the most recent answer; empty before the first one.
    pub fn feedback(&self) -> &str {
        match self {
            QuizGame::Attribute(q) => q.feedback(),
            QuizGame::Mass(q)      => q.feedback(),
            QuizGame::Placement(q) => q.feedback(),
        }
    }

    /// `None` only for a finished placement session.
    pub fn current_question(&self) -> Option<&Arc<ElementRecord>> {
        match self {
            QuizGame::Attribute(q) => Some(q.current_question()),
            QuizGame::Mass(q)      => Some(q.current_question()),
            QuizGame::Placement(q) => q.current_question(),
        }
    }

    /// Attempts left on the current question, for the attribute quizzes only.
    pub fn attempts_left(&self) -> Option<u32> {
        match self {
            QuizGame::Attribute(q) => Some(q.attempts_left()),
            _ => None,
        }
    }
}
