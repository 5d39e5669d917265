//! Headless AI-vs-AI games.

use crate::ai::{AiEngine, Difficulty};
use crate::games::tictactoe::{GameSession, Mark, Move, SessionStatus};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Parameters for a batch of AI-vs-AI games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct SimulationConfig {
    /// Tier playing X (moves first).
    x: Difficulty,
    /// Tier playing O.
    o: Difficulty,
    /// Number of games.
    games: u32,
    /// Seed for both engines.
    seed: u64,
}

impl SimulationConfig {
    /// Creates a simulation configuration.
    pub fn new(x: Difficulty, o: Difficulty, games: u32, seed: u64) -> Self {
        Self { x, o, games, seed }
    }
}

/// Tally of a simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct SimulationReport {
    /// Games played.
    games: u32,
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
    /// Moves played across all games.
    total_moves: u64,
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn ({} moves)",
            self.games, self.x_wins, self.o_wins, self.draws, self.total_moves
        )
    }
}

/// Plays `config.games` games between two engines.
///
/// The same seed always produces the same report.
#[instrument]
pub fn simulate(config: &SimulationConfig) -> SimulationReport {
    let mut x_engine = AiEngine::with_seed(Mark::X, config.seed);
    let mut o_engine = AiEngine::with_seed(Mark::O, config.seed.wrapping_add(1));
    let mut report = SimulationReport::default();

    for game in 0..config.games {
        let mut session = GameSession::new(config.o);
        session.start();

        while *session.status() == SessionStatus::InProgress {
            let (engine, difficulty) = match session.to_move() {
                Mark::X => (&mut x_engine, config.x),
                Mark::O => (&mut o_engine, config.o),
            };
            let Some(position) = engine.select_move(&session.board().snapshot(), difficulty) else {
                warn!(game, "Engine found no move on an open board");
                break;
            };
            if let Err(e) = session.play(Move::new(engine.mark(), position)) {
                warn!(game, error = %e, "Engine produced a rejected move");
                break;
            }
        }

        report.games += 1;
        report.total_moves += session.history().len() as u64;
        match session.status() {
            SessionStatus::PlayerWon => report.x_wins += 1,
            SessionStatus::OpponentWon => report.o_wins += 1,
            SessionStatus::Draw => report.draws += 1,
            status => debug!(game, ?status, "Game ended early"),
        }
    }

    info!(%report, "Simulation finished");
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_game_finishes() {
        let report = simulate(&SimulationConfig::new(Difficulty::Easy, Difficulty::Easy, 200, 5));
        assert_eq!(*report.games(), 200);
        assert_eq!(report.x_wins() + report.o_wins() + report.draws(), 200);
        assert!(*report.total_moves() <= 200 * 9);
        assert!(*report.total_moves() >= 200 * 5);
    }

    #[test]
    fn test_move_total_is_wide() {
        let report = simulate(&SimulationConfig::new(Difficulty::Hard, Difficulty::Hard, 40, 2));
        let moves: u64 = *report.total_moves();
        let per_game = moves / u64::from(*report.games());
        assert!((5..=9).contains(&per_game));
    }

    #[test]
    fn test_reproducible() {
        let config = SimulationConfig::new(Difficulty::Medium, Difficulty::Hard, 100, 11);
        assert_eq!(simulate(&config), simulate(&config));
    }

    #[test]
    fn test_hard_outplays_easy() {
        let report = simulate(&SimulationConfig::new(Difficulty::Easy, Difficulty::Hard, 500, 8));
        assert!(report.o_wins() > report.x_wins());
    }
}
