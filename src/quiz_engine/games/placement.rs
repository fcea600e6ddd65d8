use std::collections::VecDeque;
use std::sync::Arc;

use rand::{rngs::StdRng, Rng};
use tracing::{debug, info};

use crate::quiz_engine::{
    display::DisplayInfo,
    helpers,
    models::{ElementRecord, GridPosition, Outcome},
    registry::Registry,
};

const TITLE: &str = "Place the elements";

/// Walks through every element exactly once, in shuffled order, asking the
/// player to click its cell. Retries are unlimited; the session ends when
/// the queue runs dry.
pub struct PlacementQuiz {
    remaining: VecDeque<Arc<ElementRecord>>,
    current: Option<Arc<ElementRecord>>,
    total: usize,
    feedback: String,
}

impl PlacementQuiz {
    pub fn new<R: Rng + ?Sized>(registry: &Registry, rng: &mut R) -> Self {
        let mut remaining: VecDeque<_> = registry.all_elements_shuffled(rng).into();
        let total = remaining.len();
        let current = remaining.pop_front();
        if let Some(first) = &current {
            debug!(symbol = first.symbol(), total, "placement session started");
        }
        PlacementQuiz {
            remaining,
            current,
            total,
            feedback: String::new(),
        }
    }

    /// Convenience constructor owning its generator, for parity with the
    /// other engines.
    pub fn with_rng<R: Rng>(registry: &Registry, mut rng: R) -> Self {
        PlacementQuiz::new(registry, &mut rng)
    }

    /// Check a clicked cell against the current element.
    ///
    /// Once every element has been placed this keeps returning
    /// [`Outcome::SessionComplete`] no matter what is submitted.
    pub fn check_answer(&mut self, chosen: GridPosition) -> Outcome {
        let Some(current) = &self.current else {
            self.feedback = helpers::FEEDBACK_COMPLETE.to_string();
            return Outcome::SessionComplete;
        };

        if chosen != current.position() {
            self.feedback = helpers::feedback_wrong_cell(current.name());
            return Outcome::Incorrect;
        }

        self.feedback = helpers::FEEDBACK_CORRECT.to_string();
        self.current = self.remaining.pop_front();
        match &self.current {
            Some(next) => debug!(symbol = next.symbol(), left = self.remaining.len(), "next element to place"),
            None => {
                info!(total = self.total, "placement session complete");
                self.feedback = helpers::FEEDBACK_COMPLETE.to_string();
            }
        }
        Outcome::Correct
    }

    pub fn display_info(&self) -> DisplayInfo {
        DisplayInfo {
            title: TITLE.to_string(),
            question_text: self
                .current
                .as_ref()
                .map(|e| format!("Place: {}", e.name()))
                .unwrap_or_default(),
            attempts_label: None,
            answer_choices: None,
        }
    }

    /// `None` once the session is complete.
    pub fn current_question(&self) -> Option<&Arc<ElementRecord>> {
        self.current.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.current.is_none()
    }

    /// Elements still waiting, including the one currently asked.
    pub fn remaining(&self) -> usize {
        self.remaining.len() + usize::from(self.current.is_some())
    }

    pub fn placed(&self) -> usize {
        self.total - self.remaining()
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn quiz(seed: u64) -> (Registry, PlacementQuiz) {
        let reg = Registry::reference().unwrap();
        let q = PlacementQuiz::with_rng(&reg, StdRng::seed_from_u64(seed));
        (reg, q)
    }

    #[test]
    fn starts_with_every_element_pending() {
        let (reg, q) = quiz(1);
        assert_eq!(q.remaining(), reg.len());
        assert_eq!(q.placed(), 0);
        assert!(q.display_info().question_text.starts_with("Place: "));
        assert!(q.display_info().expects_free_input());
    }

    #[test]
    fn wrong_cell_keeps_the_element_and_names_it() {
        let (_, mut q) = quiz(2);
        let current = Arc::clone(q.current_question().unwrap());
        let wrong = if current.position() == GridPosition::new(1, 1) {
            GridPosition::new(1, 18)
        } else {
            GridPosition::new(1, 1)
        };
        for _ in 0..5 {
            assert_eq!(q.check_answer(wrong), Outcome::Incorrect);
        }
        assert!(Arc::ptr_eq(&current, q.current_question().unwrap()));
        assert_eq!(q.feedback(), format!("That is not {}.", current.name()));
    }

    #[test]
    fn every_element_is_asked_exactly_once() {
        let (reg, mut q) = quiz(3);
        let mut asked = HashSet::new();
        while let Some(e) = q.current_question().cloned() {
            assert!(asked.insert(e.atomic_number()), "{} asked twice", e.symbol());
            assert_eq!(q.check_answer(e.position()), Outcome::Correct);
        }
        assert_eq!(asked.len(), reg.len());
        assert_eq!(q.placed(), reg.len());
        assert_eq!(q.feedback(), "Congratulations! You placed every element!");
    }

    #[test]
    fn completion_is_idempotent() {
        let (_, mut q) = quiz(4);
        while let Some(pos) = q.current_question().map(|e| e.position()) {
            q.check_answer(pos);
        }
        assert!(q.is_complete());
        for _ in 0..3 {
            assert_eq!(q.check_answer(GridPosition::new(1, 1)), Outcome::SessionComplete);
        }
        assert_eq!(q.display_info().question_text, "");
    }
}
