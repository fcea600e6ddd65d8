//! Attribute quizzes: atomic number, name, and symbol.
//!
//! One state machine serves all three; what varies is the [`AttributeSelector`]
//! strategy that says which value is expected and how the question is worded.

use std::sync::Arc;

use rand::{rngs::StdRng, Rng};
use tracing::{debug, trace};

use crate::quiz_engine::{
    config::QuizSettings,
    display::DisplayInfo,
    error::Result,
    helpers::{self, answers_match, is_integer_text},
    models::{ElementRecord, Outcome},
    registry::Registry,
};

/// Strategy for one attribute quiz.
pub trait AttributeSelector {
    fn title(&self) -> &str;

    /// Expected answer for `element`, in the form the player should type it.
    fn expected(&self, element: &ElementRecord) -> String;

    fn prompt(&self, element: &ElementRecord) -> String;

    /// Numeric attributes reject non-numeric input without using an attempt.
    fn is_numeric(&self) -> bool {
        false
    }
}

/// The three built-in attribute quizzes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    /// Given the name, answer the atomic number.
    AtomicNumber,
    /// Given the symbol, answer the name.
    Name,
    /// Given the name, answer the symbol.
    Symbol,
}

impl AttributeSelector for Attribute {
    fn title(&self) -> &str {
        match self {
            Attribute::AtomicNumber => "Practice atomic numbers",
            Attribute::Name         => "Practice element names",
            Attribute::Symbol       => "Practice element symbols",
        }
    }

    fn expected(&self, element: &ElementRecord) -> String {
        match self {
            Attribute::AtomicNumber => element.atomic_number().to_string(),
            Attribute::Name         => element.name().to_string(),
            Attribute::Symbol       => element.symbol().to_string(),
        }
    }

    fn prompt(&self, element: &ElementRecord) -> String {
        match self {
            Attribute::AtomicNumber => format!("What is the atomic number of {}?", element.name()),
            Attribute::Name         => format!("Which element has the symbol {}?", element.symbol()),
            Attribute::Symbol       => format!("What is the symbol for {}?", element.name()),
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(self, Attribute::AtomicNumber)
    }
}

/// Bounded-attempt quiz over one attribute of a randomly drawn element.
pub struct AttributeQuiz<S = Attribute, R = StdRng> {
    registry: Arc<Registry>,
    selector: S,
    rng: R,
    settings: QuizSettings,
    current: Arc<ElementRecord>,
    attempts_left: u32,
    feedback: String,
}

impl<S: AttributeSelector, R: Rng> AttributeQuiz<S, R> {
    /// Start a session: draw the first question with a full set of attempts.
    pub fn new(registry: Arc<Registry>, selector: S, mut rng: R, settings: QuizSettings) -> Result<Self> {
        settings.validate()?;
        let current = Arc::clone(registry.random_element(&mut rng));
        debug!(symbol = current.symbol(), quiz = selector.title(), "first question drawn");
        Ok(AttributeQuiz {
            attempts_left: settings.max_attempts,
            registry,
            selector,
            rng,
            settings,
            current,
            feedback: String::new(),
        })
    }

    fn next_question(&mut self) {
        self.attempts_left = self.settings.max_attempts;
        self.current = Arc::clone(self.registry.random_element(&mut self.rng));
        debug!(symbol = self.current.symbol(), "new question drawn");
    }

    /// Evaluate a typed answer.
    ///
    /// A correct answer, or a wrong one on the last attempt, draws a new
    /// question and resets the attempt counter. Otherwise one attempt is used
    /// and the same question stays up. Non-numeric text for a numeric
    /// attribute is reported without using an attempt.
    pub fn check_answer(&mut self, raw_answer: &str) -> Outcome {
        let expected = self.selector.expected(&self.current);
        let trim = self.settings.trim_answers;
        trace!(answer = raw_answer, expected = %expected, attempts_left = self.attempts_left, "checking answer");

        if self.selector.is_numeric() && !is_integer_text(raw_answer, trim) {
            self.feedback = helpers::feedback_not_a_number(raw_answer);
            return Outcome::InvalidInput;
        }

        if answers_match(raw_answer, &expected, trim) {
            self.feedback = helpers::FEEDBACK_CORRECT.to_string();
            self.next_question();
            Outcome::Correct
        } else if self.attempts_left <= 1 {
            self.feedback = helpers::feedback_reveal(&expected);
            self.next_question();
            Outcome::IncorrectExhausted
        } else {
            self.attempts_left -= 1;
            self.feedback = helpers::feedback_retry(self.attempts_left);
            Outcome::IncorrectRetry
        }
    }

    pub fn display_info(&self) -> DisplayInfo {
        let attempts_label = (self.attempts_left < self.settings.max_attempts)
            .then(|| helpers::attempts_label(self.attempts_left));
        DisplayInfo {
            title: self.selector.title().to_string(),
            question_text: self.selector.prompt(&self.current),
            attempts_label,
            answer_choices: None,
        }
    }

    pub fn current_question(&self) -> &Arc<ElementRecord> {
        &self.current
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    pub fn max_attempts(&self) -> u32 {
        self.settings.max_attempts
    }

    /// Result of the most recent answer; empty before the first one.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::{Family, RawElement};
    use rand::SeedableRng;

    fn two_elements() -> Arc<Registry> {
        let make = |symbol: &str, name: &str, z: u16, mass: f64, group: u8| {
            ElementRecord::new(RawElement {
                symbol: symbol.to_string(),
                name: name.to_string(),
                atomic_number: z,
                mass,
                period: 1,
                group: Some(group),
                family: Family::Other,
            })
            .unwrap()
        };
        Arc::new(
            Registry::new(vec![
                make("H", "Hydrogen", 1, 1.008, 1),
                make("He", "Helium", 2, 4.003, 18),
            ])
            .unwrap(),
        )
    }

    fn quiz(attr: Attribute, seed: u64) -> AttributeQuiz {
        AttributeQuiz::new(two_elements(), attr, StdRng::seed_from_u64(seed), QuizSettings::default())
            .unwrap()
    }

    fn wrong_answer(q: &AttributeQuiz) -> &'static str {
        match q.selector() {
            Attribute::AtomicNumber => "99",
            Attribute::Name         => "Unobtainium",
            Attribute::Symbol       => "Zz",
        }
    }

    #[test]
    fn fresh_quiz_has_full_attempts_and_no_feedback() {
        let q = quiz(Attribute::Name, 3);
        assert_eq!(q.attempts_left(), 3);
        assert_eq!(q.feedback(), "");
        assert_eq!(q.display_info().attempts_label, None);
    }

    #[test]
    fn correct_answer_any_case_resets_attempts() {
        for attr in [Attribute::AtomicNumber, Attribute::Name, Attribute::Symbol] {
            let mut q = quiz(attr, 11);
            q.check_answer(wrong_answer(&q));
            assert_eq!(q.attempts_left(), 2);
            let answer = attr.expected(q.current_question()).to_uppercase();
            assert_eq!(q.check_answer(&answer), Outcome::Correct, "{attr:?}");
            assert_eq!(q.attempts_left(), 3);
            assert_eq!(q.feedback(), "Correct!");
        }
    }

    #[test]
    fn wrong_answer_keeps_question_and_uses_one_attempt() {
        let mut q = quiz(Attribute::Symbol, 5);
        let before = Arc::clone(q.current_question());
        assert_eq!(q.check_answer("Zz"), Outcome::IncorrectRetry);
        assert!(Arc::ptr_eq(&before, q.current_question()));
        assert_eq!(q.attempts_left(), 2);
        assert_eq!(q.feedback(), "Wrong, 2 attempts left.");
        assert_eq!(q.display_info().attempts_label.as_deref(), Some("Attempts left: 2"));
    }

    #[test]
    fn last_wrong_answer_reveals_and_advances() {
        let mut q = quiz(Attribute::Name, 8);
        let expected = Attribute::Name.expected(q.current_question());
        assert_eq!(q.check_answer("nope"), Outcome::IncorrectRetry);
        assert_eq!(q.check_answer("nope"), Outcome::IncorrectRetry);
        assert_eq!(q.attempts_left(), 1);
        assert_eq!(q.check_answer("nope"), Outcome::IncorrectExhausted);
        assert_eq!(q.feedback(), format!("Wrong! The correct answer was: {expected}"));
        assert_eq!(q.attempts_left(), 3);
    }

    #[test]
    fn single_attempt_setting_exhausts_immediately() {
        let settings = QuizSettings { max_attempts: 1, ..QuizSettings::default() };
        let mut q = AttributeQuiz::new(two_elements(), Attribute::Symbol, StdRng::seed_from_u64(2), settings)
            .unwrap();
        assert_eq!(q.check_answer("Zz"), Outcome::IncorrectExhausted);
        assert_eq!(q.attempts_left(), 1);
    }

    #[test]
    fn non_numeric_input_does_not_use_an_attempt() {
        let mut q = quiz(Attribute::AtomicNumber, 4);
        let before = Arc::clone(q.current_question());
        assert_eq!(q.check_answer("hydrogen"), Outcome::InvalidInput);
        assert_eq!(q.attempts_left(), 3);
        assert!(Arc::ptr_eq(&before, q.current_question()));
        assert!(q.feedback().contains("not a number"));
    }

    #[test]
    fn whitespace_is_trimmed_by_default() {
        let mut q = quiz(Attribute::AtomicNumber, 6);
        let answer = format!("  {}\n", q.current_question().atomic_number());
        assert_eq!(q.check_answer(&answer), Outcome::Correct);
    }

    #[test]
    fn whitespace_counts_when_trimming_is_off() {
        let settings = QuizSettings { trim_answers: false, ..QuizSettings::default() };
        let mut q = AttributeQuiz::new(two_elements(), Attribute::Symbol, StdRng::seed_from_u64(6), settings)
            .unwrap();
        let answer = format!(" {}", q.current_question().symbol());
        assert_eq!(q.check_answer(&answer), Outcome::IncorrectRetry);
    }

    #[test]
    fn zero_attempts_setting_is_rejected() {
        let settings = QuizSettings { max_attempts: 0, ..QuizSettings::default() };
        assert!(AttributeQuiz::new(two_elements(), Attribute::Name, StdRng::seed_from_u64(1), settings).is_err());
    }

    struct PeriodSelector;

    impl AttributeSelector for PeriodSelector {
        fn title(&self) -> &str {
            "Practice periods"
        }
        fn expected(&self, element: &ElementRecord) -> String {
            element.period().to_string()
        }
        fn prompt(&self, element: &ElementRecord) -> String {
            format!("Which period is {} in?", element.name())
        }
        fn is_numeric(&self) -> bool {
            true
        }
    }

    #[test]
    fn custom_selector_plugs_into_the_same_engine() {
        let mut q = AttributeQuiz::new(two_elements(), PeriodSelector, StdRng::seed_from_u64(9), QuizSettings::default())
            .unwrap();
        assert_eq!(q.display_info().title, "Practice periods");
        assert!(q.display_info().question_text.starts_with("Which period is "));
        assert_eq!(q.check_answer("1"), Outcome::Correct);
    }
}
