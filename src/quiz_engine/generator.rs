use std::sync::Arc;

use tracing::debug;

use crate::quiz_engine::{
    config::GameRequest,
    error::Result,
    games::{Attribute, AttributeQuiz, MassQuiz, PlacementQuiz, QuizGame},
    helpers::make_rng,
    models::QuizKind,
    registry::Registry,
};

/// Core dispatch: build the engine for the requested mode.
///
/// The registry is shared; each game gets its own generator, seeded from
/// `request.rng_seed` when present.
pub fn start_game(registry: Arc<Registry>, request: GameRequest) -> Result<QuizGame> {
    request.settings.validate()?;
    let mut rng = make_rng(request.rng_seed);
    debug!(kind = %request.kind, seed = ?request.rng_seed, "starting game");

    let attr = match request.kind {
        QuizKind::AtomicNumber => Attribute::AtomicNumber,
        QuizKind::Name         => Attribute::Name,
        QuizKind::Symbol       => Attribute::Symbol,
        QuizKind::Mass         => return Ok(QuizGame::Mass(MassQuiz::new(registry, rng))),
        QuizKind::Placement    => {
            return Ok(QuizGame::Placement(PlacementQuiz::new(&registry, &mut rng)));
        }
    };
    let quiz = AttributeQuiz::new(registry, attr, rng, request.settings)?;
    Ok(QuizGame::Attribute(quiz))
}
