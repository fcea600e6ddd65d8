use std::sync::Arc;

use rand::{rngs::StdRng, Rng};
use tracing::{debug, trace};

use crate::quiz_engine::{
    decoy::build_answer_choices,
    display::DisplayInfo,
    helpers,
    models::{ElementRecord, Outcome},
    registry::Registry,
};

const TITLE: &str = "Practice atomic masses";

/// Multiple-choice mass quiz. Single shot: every answer, right or wrong,
/// moves on to a new element.
pub struct MassQuiz<R = StdRng> {
    registry: Arc<Registry>,
    rng: R,
    current: Arc<ElementRecord>,
    // Built once per question so repeated snapshots show the same options.
    choices: Vec<f64>,
    feedback: String,
}

impl<R: Rng> MassQuiz<R> {
    pub fn new(registry: Arc<Registry>, mut rng: R) -> Self {
        let current = Arc::clone(registry.random_element(&mut rng));
        let choices = build_answer_choices(&mut rng, current.mass());
        debug!(symbol = current.symbol(), "first mass question drawn");
        MassQuiz {
            registry,
            rng,
            current,
            choices,
            feedback: String::new(),
        }
    }

    fn next_question(&mut self) {
        self.current = Arc::clone(self.registry.random_element(&mut self.rng));
        self.choices = build_answer_choices(&mut self.rng, self.current.mass());
        debug!(symbol = self.current.symbol(), "new mass question drawn");
    }

    /// Correct only on exact equality with the unrounded true mass, so the
    /// presentation layer must hand back one of the emitted choices verbatim.
    pub fn check_answer(&mut self, chosen: f64) -> Outcome {
        let true_mass = self.current.mass();
        trace!(chosen, true_mass, "checking mass answer");

        let outcome = if chosen == true_mass {
            self.feedback = helpers::FEEDBACK_CORRECT.to_string();
            Outcome::Correct
        } else {
            self.feedback = helpers::feedback_wrong_mass(true_mass);
            Outcome::Incorrect
        };
        self.next_question();
        outcome
    }

    pub fn answer_choices(&self) -> &[f64] {
        &self.choices
    }

    pub fn display_info(&self) -> DisplayInfo {
        DisplayInfo {
            title: TITLE.to_string(),
            question_text: format!("What is the atomic mass of {}?", self.current.name()),
            attempts_label: None,
            answer_choices: Some(self.choices.clone()),
        }
    }

    pub fn current_question(&self) -> &Arc<ElementRecord> {
        &self.current
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}
