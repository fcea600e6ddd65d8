use serde_json::{json, Value};

use crate::quiz_engine::{
    error::Result,
    games::QuizGame,
    models::{Answer, Outcome},
    registry::Registry,
};

/// Grid size the client lays out: seven periods plus the two f-block strips.
pub const GRID_ROWS: u8 = 9;
pub const GRID_COLUMNS: u8 = 18;

/// Snake-case tag for an outcome, as the client switches on it.
fn outcome_tag(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Correct            => "correct",
        Outcome::IncorrectRetry     => "incorrect_retry",
        Outcome::IncorrectExhausted => "incorrect_exhausted",
        Outcome::Incorrect          => "incorrect",
        Outcome::InvalidInput       => "invalid_input",
        Outcome::SessionComplete    => "session_complete",
    }
}

/// Build one grid cell entry. Empty cells carry `null` element data.
fn grid_cell(registry: &Registry, row: u8, column: u8) -> Value {
    match registry.lookup_by_position(row, column) {
        Some(e) => json!({
            "row": row,
            "column": column,
            "symbol": e.symbol(),
            "atomic_number": e.atomic_number(),
            "family": e.family().token(),
        }),
        None => json!({
            "row": row,
            "column": column,
            "symbol": null,
            "atomic_number": null,
            "family": null,
        }),
    }
}

/// Row-major list of every cell on the table grid, for drawing the board.
pub fn grid_state(registry: &Registry) -> Value {
    let cells: Vec<Value> = (1..=GRID_ROWS)
        .flat_map(|r| (1..=GRID_COLUMNS).map(move |c| (r, c)))
        .map(|(r, c)| grid_cell(registry, r, c))
        .collect();
    Value::Array(cells)
}

/// Map the active game to the JSON snapshot the client renders.
///
/// `last_outcome` is the result of the most recent `check_answer`, if any.
pub fn to_client_state(game: &QuizGame, last_outcome: Option<Outcome>) -> Value {
    let info = game.display_info();
    let input = if info.expects_free_input() {
        match game {
            QuizGame::Placement(_) => "grid",
            _ => "text",
        }
    } else {
        "choice"
    };

    let progress = match game {
        QuizGame::Placement(q) => json!({ "placed": q.placed(), "remaining": q.remaining() }),
        _ => Value::Null,
    };

    json!({
        "kind": game.kind(),
        "title": info.title,
        "question_text": info.question_text,
        "attempts_label": info.attempts_label,
        "answer_choices": info.answer_choices,
        "input": input,
        "feedback": game.feedback(),
        "last_outcome": last_outcome.map(outcome_tag),
        "progress": progress,
    })
}

/// Decode an answer posted back by the client.
///
/// Accepted shapes:
/// `{"type":"text","value":"Fe"}`, `{"type":"mass","value":55.845}`,
/// `{"type":"position","value":{"row":4,"column":8}}`.
pub fn answer_from_client(value: &Value) -> Result<Answer> {
    Ok(serde_json::from_value(value.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::{
        config::GameRequest, generator::start_game, models::{GridPosition, QuizKind},
    };
    use std::sync::Arc;

    fn registry() -> Arc<Registry> {
        Arc::new(Registry::reference().unwrap())
    }

    #[test]
    fn grid_has_every_cell_and_every_element() {
        let reg = registry();
        let grid = grid_state(&reg);
        let cells = grid.as_array().unwrap();
        assert_eq!(cells.len(), 9 * 18);
        let filled = cells.iter().filter(|c| !c["symbol"].is_null()).count();
        assert_eq!(filled, reg.len());
        assert_eq!(cells[0]["symbol"], "H");
        assert_eq!(cells[1]["symbol"], Value::Null);
    }

    #[test]
    fn mass_snapshot_offers_choices() {
        let game = start_game(registry(), GameRequest::new(QuizKind::Mass).with_seed(3)).unwrap();
        let state = to_client_state(&game, None);
        assert_eq!(state["kind"], "Mass");
        assert_eq!(state["input"], "choice");
        assert_eq!(state["answer_choices"].as_array().unwrap().len(), 3);
        assert_eq!(state["last_outcome"], Value::Null);
    }

    #[test]
    fn placement_snapshot_reports_progress() {
        let game = start_game(registry(), GameRequest::new(QuizKind::Placement).with_seed(3)).unwrap();
        let state = to_client_state(&game, None);
        assert_eq!(state["input"], "grid");
        assert_eq!(state["progress"]["placed"], 0);
        assert_eq!(state["progress"]["remaining"], 118);
    }

    #[test]
    fn attribute_snapshot_shows_attempts_after_a_miss() {
        let mut game = start_game(registry(), GameRequest::new(QuizKind::Symbol).with_seed(3)).unwrap();
        let outcome = game.check_answer("Qq").unwrap();
        let state = to_client_state(&game, Some(outcome));
        assert_eq!(state["input"], "text");
        assert_eq!(state["last_outcome"], "incorrect_retry");
        assert_eq!(state["attempts_label"], "Attempts left: 2");
        assert_eq!(state["answer_choices"], Value::Null);
    }

    #[test]
    fn client_answers_decode() {
        let text = answer_from_client(&json!({"type": "text", "value": "Fe"})).unwrap();
        assert_eq!(text, Answer::Text("Fe".to_string()));
        let mass = answer_from_client(&json!({"type": "mass", "value": 55.845})).unwrap();
        assert_eq!(mass, Answer::Mass(55.845));
        let cell = answer_from_client(&json!({"type": "position", "value": {"row": 4, "column": 8}})).unwrap();
        assert_eq!(cell, Answer::Position(GridPosition::new(4, 8)));
        assert!(answer_from_client(&json!({"type": "colour", "value": "red"})).is_err());
    }
}
