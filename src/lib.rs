//! # element_drill
//!
//! Quiz engine for drilling the periodic table: atomic numbers, element
//! names, symbols, atomic masses, and where each element sits on the grid.
//!
//! The crate holds no UI. A driver keeps one [`QuizGame`] per practice
//! session, forwards each player action to [`QuizGame::check_answer`], and
//! re-renders from [`QuizGame::display_info`] and [`QuizGame::feedback`].
//!
//! ## How it works
//!
//! 1. Build a [`Registry`] — either [`Registry::reference()`] for the embedded
//!    118-element dataset, or [`Registry::new`] with records from your own
//!    loader. The registry is immutable and shared behind an `Arc`.
//! 2. Call [`start_game`] with a [`GameRequest`] naming the [`QuizKind`], an
//!    optional RNG seed, and [`QuizSettings`].
//! 3. Submit answers. Each call returns an [`Outcome`] and updates the
//!    feedback text; the engine draws the next question itself when the
//!    outcome calls for it.
//!
//! ## Modes
//!
//! - **Atomic number / Name / Symbol**: free-text answers, case-insensitive,
//!   three attempts per question by default.
//! - **Mass**: pick one of three masses; decoys never round to the same
//!   integer as each other or as the true value.
//! - **Placement**: click the cell for each element; every element comes up
//!   exactly once per session.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use element_drill::{start_game, GameRequest, Outcome, QuizKind, Registry};
//!
//! let registry = Arc::new(Registry::reference().unwrap());
//! let mut game = start_game(registry, GameRequest::new(QuizKind::Symbol).with_seed(42)).unwrap();
//!
//! println!("Q: {}", game.display_info().question_text);
//! let symbol = game.current_question().unwrap().symbol().to_lowercase();
//! assert_eq!(game.check_answer(symbol.as_str()).unwrap(), Outcome::Correct);
//! println!("{}", game.feedback());
//! ```

pub mod client_adapter;
pub mod quiz_engine;

// Convenience re-exports so callers can use `element_drill::start_game`
// directly without reaching into `quiz_engine::`.
pub use client_adapter::{answer_from_client, grid_state, to_client_state};
pub use quiz_engine::{
    build_answer_choices, start_game, Answer, Attribute, AttributeQuiz, AttributeSelector,
    DisplayInfo, ElementRecord, Family, GameRequest, GridPosition, MassQuiz, Outcome,
    PlacementQuiz, QuizError, QuizGame, QuizKind, QuizSettings, RawElement, Registry, Result,
};
