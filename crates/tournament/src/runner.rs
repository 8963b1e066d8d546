//! Tournament runner: four searches with alternating roles

use search_core::{AlphaBetaSearch, LeafEvaluator, NoisyEvaluator};
use tracing::info;

use crate::error::{InputField, TournamentError};
use crate::results::{Outcome, Player, TournamentRecord, TournamentState};

/// Games per tournament. Even, so each player maximizes equally often.
pub const GAMES_PER_TOURNAMENT: usize = 4;

/// Checks the three caller-supplied inputs before any search runs.
pub fn validate_inputs(
    starting_role: u8,
    rating_a: f64,
    rating_b: f64,
) -> Result<(), TournamentError> {
    if starting_role > 1 {
        return Err(TournamentError::invalid(
            InputField::StartingRole,
            format!("must be 0 or 1, got {}", starting_role),
        ));
    }
    for (field, rating) in [(InputField::RatingA, rating_a), (InputField::RatingB, rating_b)] {
        if !rating.is_finite() {
            return Err(TournamentError::invalid(
                field,
                format!("must be a finite number, got {}", rating),
            ));
        }
        if rating <= -1.0 {
            return Err(TournamentError::invalid(
                field,
                format!("must be greater than -1, got {}", rating),
            ));
        }
    }
    Ok(())
}

/// Player who maximizes in the given game.
///
/// Starting role 0 gives player A the first maximizing turn; roles then
/// alternate game by game.
pub fn maximizer_for_game(starting_role: u8, game: usize) -> Player {
    if (starting_role as usize + game) % 2 == 0 {
        Player::A
    } else {
        Player::B
    }
}

/// Winner of a game from the root utility and who was maximizing.
///
/// Positive favours the maximizer, negative the minimizer; exactly zero is a
/// draw.
pub fn classify(utility: f64, maximizer: Player) -> Outcome {
    if utility > 0.0 {
        maximizer.into()
    } else if utility < 0.0 {
        maximizer.opponent().into()
    } else {
        Outcome::Draw
    }
}

/// Runs strength tournaments between two rated players
///
/// Every game searches the fixed depth-5, binary tree.
#[derive(Debug, Clone, Default)]
pub struct TournamentRunner {
    search: AlphaBetaSearch,
}

impl TournamentRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a full tournament with the given leaf evaluator.
    ///
    /// Inputs are validated first. Any failing game aborts the tournament;
    /// no partial state is returned.
    pub fn run<E: LeafEvaluator + ?Sized>(
        &self,
        starting_role: u8,
        rating_a: f64,
        rating_b: f64,
        evaluator: &mut E,
    ) -> Result<TournamentState, TournamentError> {
        validate_inputs(starting_role, rating_a, rating_b)?;

        let mut state = TournamentState::new(starting_role, rating_a, rating_b);

        for game in 0..GAMES_PER_TOURNAMENT {
            let maximizer = maximizer_for_game(starting_role, game);
            let (max_rating, min_rating) = match maximizer {
                Player::A => (rating_a, rating_b),
                Player::B => (rating_b, rating_a),
            };

            let outcome = self.search.search(max_rating, min_rating, evaluator)?;
            let winner = classify(outcome.utility, maximizer);

            info!(
                game = game + 1,
                maximizer = ?maximizer,
                utility = outcome.utility,
                winner = ?winner,
                "game finished"
            );

            state.add_record(TournamentRecord {
                game,
                maximizer,
                winner,
                utility: outcome.utility,
                tree: outcome.root,
                stats: outcome.stats,
            });
        }

        info!(
            wins_a = state.wins_a(),
            wins_b = state.wins_b(),
            draws = state.draws(),
            overall = ?state.overall_winner(),
            "tournament finished"
        );

        Ok(state)
    }
}

/// Run a tournament with process-wide noise
pub fn run_tournament(
    starting_role: u8,
    rating_a: f64,
    rating_b: f64,
) -> Result<TournamentState, TournamentError> {
    TournamentRunner::default().run(
        starting_role,
        rating_a,
        rating_b,
        &mut NoisyEvaluator::thread(),
    )
}

/// Run a reproducible tournament from a noise seed
pub fn run_tournament_seeded(
    starting_role: u8,
    rating_a: f64,
    rating_b: f64,
    seed: u64,
) -> Result<TournamentState, TournamentError> {
    TournamentRunner::default().run(
        starting_role,
        rating_a,
        rating_b,
        &mut NoisyEvaluator::seeded(seed),
    )
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
