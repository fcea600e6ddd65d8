use serde::{Deserialize, Serialize};

/// Render-ready snapshot of a game, for whatever presentation layer drives it.
///
/// `attempts_label` is only set while attempts are tracked and the player is
/// past their first try. `answer_choices` is only set by the mass quiz; when
/// it is `None` the presentation layer should ask for free input (text or a
/// grid click).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayInfo {
    pub title: String,
    pub question_text: String,
    pub attempts_label: Option<String>,
    pub answer_choices: Option<Vec<f64>>,
}

impl DisplayInfo {
    pub fn expects_free_input(&self) -> bool {
        self.answer_choices.is_none()
    }
}
