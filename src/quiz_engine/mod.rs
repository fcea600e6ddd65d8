//! Core quiz engine — element registry, question generation, answer checking.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Element records, grid positions, quiz kinds, outcomes, answers |
//! | `registry`  | Read-only element set: random draw, shuffled copy, lookups |
//! | `dataset`   | Embedded 118-element reference data and its line parser |
//! | `decoy`     | Three-choice answer sets for the mass quiz |
//! | `helpers`   | Answer normalisation, feedback wording, RNG construction |
//! | `config`    | `QuizSettings` and `GameRequest` |
//! | `display`   | `DisplayInfo` snapshot handed to the presentation layer |
//! | `error`     | `QuizError` and the crate `Result` alias |
//! | `games`     | Attribute, mass and placement engines plus the `QuizGame` union |
//! | `generator` | Single entry point `start_game()` — dispatches on `QuizKind` |

pub mod config;
pub mod dataset;
pub mod decoy;
pub mod display;
pub mod error;
pub mod games;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod registry;

// Re-export the public API surface so callers can use
// `quiz_engine::start_game` without reaching into sub-modules.
pub use config::{GameRequest, QuizSettings};
pub use decoy::build_answer_choices;
pub use display::DisplayInfo;
pub use error::{QuizError, Result};
pub use games::{
    Attribute, AttributeQuiz, AttributeSelector, MassQuiz, PlacementQuiz, QuizGame,
};
pub use generator::start_game;
pub use models::{
    Answer, ElementRecord, Family, GridPosition, Outcome, QuizKind, RawElement,
};
pub use registry::Registry;
