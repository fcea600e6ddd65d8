use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    error::{QuizError, Result},
    models::QuizKind,
};

/// Tunables shared by the game engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    /// Tries per question in the attribute quizzes.
    pub max_attempts: u32,
    /// Strip leading/trailing whitespace from text answers before comparing.
    pub trim_answers: bool,
}

impl Default for QuizSettings {
    fn default() -> Self {
        QuizSettings {
            max_attempts: 3,
            trim_answers: true,
        }
    }
}

impl QuizSettings {
    /// Parse settings from JSON; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let settings: QuizSettings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(QuizError::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything needed to start one practice session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRequest {
    pub kind: QuizKind,
    /// `Some` makes every draw, shuffle and decoy reproducible.
    pub rng_seed: Option<u64>,
    #[serde(default)]
    pub settings: QuizSettings,
}

impl GameRequest {
    /// Request with entropy seeding and default settings.
    pub fn new(kind: QuizKind) -> Self {
        GameRequest {
            kind,
            rng_seed: None,
            settings: QuizSettings::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_settings(mut self, settings: QuizSettings) -> Self {
        self.settings = settings;
        self
    }
}
