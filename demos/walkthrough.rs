//! Scripted walkthrough of all five quiz modes.
//!
//! Run with: `cargo run --example walkthrough`
//! Set `RUST_LOG=element_drill=debug` to see question draws as they happen.
//!
//! Each mode is started with a fixed seed so the output is reproducible.
//! The script answers wrong once, then right, and prints the snapshot the
//! presentation layer would render after every step.

use std::sync::Arc;

use element_drill::{
    start_game, to_client_state, Answer, GameRequest, GridPosition, Outcome, QuizGame, QuizKind,
    Registry,
};
use tracing_subscriber::EnvFilter;

/// Pretty-print the current snapshot plus the last outcome.
fn print_state(game: &QuizGame, outcome: Option<Outcome>) {
    let info = game.display_info();
    if let Some(outcome) = outcome {
        println!("  -> {outcome:?}: {}", game.feedback());
    }
    print!("  Q: {}", info.question_text);
    if let Some(label) = &info.attempts_label {
        print!("  [{label}]");
    }
    println!();
    if let Some(choices) = &info.answer_choices {
        let shown: Vec<String> = choices.iter().map(|c| format!("{c:.0}")).collect();
        println!("     choices: {}", shown.join(" / "));
    }
}

/// A deliberately wrong answer of the right shape for this mode.
fn wrong_answer(game: &QuizGame) -> Answer {
    let e = game.current_question().expect("session still running");
    match game.kind() {
        QuizKind::AtomicNumber => Answer::Text("0".to_string()),
        QuizKind::Name | QuizKind::Symbol => Answer::Text("Xx".to_string()),
        QuizKind::Mass => {
            let decoy = game
                .display_info()
                .answer_choices
                .and_then(|cs| cs.into_iter().find(|&c| c != e.mass()))
                .expect("mass quiz always has decoys");
            Answer::Mass(decoy)
        }
        QuizKind::Placement => {
            let p = e.position();
            Answer::Position(GridPosition::new(p.row, if p.column == 1 { 2 } else { 1 }))
        }
    }
}

fn right_answer(game: &QuizGame) -> Answer {
    let e = game.current_question().expect("session still running");
    match game.kind() {
        QuizKind::AtomicNumber => Answer::Text(e.atomic_number().to_string()),
        QuizKind::Name         => Answer::Text(e.name().to_uppercase()),
        QuizKind::Symbol       => Answer::Text(format!("  {}  ", e.symbol())),
        QuizKind::Mass         => Answer::Mass(e.mass()),
        QuizKind::Placement    => Answer::Position(e.position()),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = Arc::new(Registry::reference().expect("embedded dataset is valid"));
    println!("Loaded {} elements.", registry.len());

    for (kind, seed) in [
        (QuizKind::AtomicNumber, 1001u64),
        (QuizKind::Name,         2002),
        (QuizKind::Symbol,       3003),
        (QuizKind::Mass,         4004),
        (QuizKind::Placement,    5005),
    ] {
        let mut game = start_game(Arc::clone(&registry), GameRequest::new(kind).with_seed(seed))
            .expect("default settings are valid");

        println!();
        println!("== {} (seed {seed}) ==", game.display_info().title);
        print_state(&game, None);

        let outcome = game.check_answer(wrong_answer(&game)).expect("answer shape matches");
        print_state(&game, Some(outcome));

        let outcome = game.check_answer(right_answer(&game)).expect("answer shape matches");
        print_state(&game, Some(outcome));
    }

    // What a client receives for the last mode.
    let game = start_game(registry, GameRequest::new(QuizKind::Placement).with_seed(6006))
        .expect("default settings are valid");
    println!();
    println!("== Client snapshot ==");
    println!("{:#}", to_client_state(&game, None));
}
