//! Move selection for the AI opponent.
//!
//! The engine never sees the live board. It works on a [`BoardSnapshot`] and
//! evaluates every hypothetical placement on a throwaway copy of it.
//!
//! Hard play is a greedy, one-ply heuristic: it wins when it can, blocks an
//! immediate loss, then prefers the center, a corner, and finally any cell.
//! It does not look for forks, so a careful player can still beat it.

use crate::games::tictactoe::{BoardSnapshot, Mark, Position, rules};
use derive_getters::Getters;
use derive_more::Display;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use super::Difficulty;

/// Chance that a Medium request is answered with Hard play.
pub const MEDIUM_BEST_MOVE_PROBABILITY: f64 = 0.7;

/// The rule that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Rule {
    /// Uniform pick among all empty cells (Easy, or Medium's random branch).
    Random,
    /// Completes a line for the AI.
    WinNow,
    /// Occupies the cell that would complete a line for the opponent.
    Block,
    /// Takes the center.
    Center,
    /// Uniform pick among the empty corners.
    Corner,
    /// Uniform pick among all empty cells when nothing else applies.
    Fallback,
}

/// A chosen move and the rule behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Decision {
    /// Cell to play.
    position: Position,
    /// Rule that selected it.
    rule: Rule,
}

impl Decision {
    fn new(position: Position, rule: Rule) -> Self {
        Self { position, rule }
    }
}

/// AI opponent playing `mark`, drawing randomness from `R`.
///
/// The random source is owned by the engine rather than global, so a seeded
/// engine makes the same choices on every run.
#[derive(Debug, Clone)]
pub struct AiEngine<R = SmallRng> {
    mark: Mark,
    rng: R,
}

impl AiEngine<SmallRng> {
    /// Creates an engine seeded from OS entropy.
    pub fn new(mark: Mark) -> Self {
        Self::with_rng(mark, SmallRng::from_entropy())
    }

    /// Creates a reproducible engine.
    pub fn with_seed(mark: Mark, seed: u64) -> Self {
        Self::with_rng(mark, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AiEngine<R> {
    /// Creates an engine around an existing random source.
    pub fn with_rng(mark: Mark, rng: R) -> Self {
        Self { mark, rng }
    }

    /// The mark this engine plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Picks a cell to play, or `None` when the board is full.
    pub fn select_move(
        &mut self,
        snapshot: &BoardSnapshot,
        difficulty: Difficulty,
    ) -> Option<Position> {
        self.decide(snapshot, difficulty).map(|d| d.position)
    }

    /// Picks a cell to play and reports which rule chose it.
    #[instrument(skip(self, snapshot), fields(mark = %self.mark))]
    pub fn decide(
        &mut self,
        snapshot: &BoardSnapshot,
        difficulty: Difficulty,
    ) -> Option<Decision> {
        let empty: Vec<Position> = snapshot.empty_cells().collect();
        if empty.is_empty() {
            debug!("No move available");
            return None;
        }

        let decision = match difficulty {
            Difficulty::Easy => self.random_move(&empty),
            Difficulty::Medium => {
                if self.rng.gen_bool(MEDIUM_BEST_MOVE_PROBABILITY) {
                    self.best_move(snapshot, &empty)
                } else {
                    self.random_move(&empty)
                }
            }
            Difficulty::Hard => self.best_move(snapshot, &empty),
        }?;

        debug!(position = %decision.position, rule = %decision.rule, "AI chose move");
        Some(decision)
    }

    fn random_move(&mut self, empty: &[Position]) -> Option<Decision> {
        empty
            .choose(&mut self.rng)
            .map(|&pos| Decision::new(pos, Rule::Random))
    }

    fn best_move(&mut self, snapshot: &BoardSnapshot, empty: &[Position]) -> Option<Decision> {
        if let Some(pos) = completing_move(snapshot, empty, self.mark) {
            return Some(Decision::new(pos, Rule::WinNow));
        }

        if let Some(pos) = completing_move(snapshot, empty, self.mark.opponent()) {
            return Some(Decision::new(pos, Rule::Block));
        }

        if snapshot.is_empty(Position::CENTER) {
            return Some(Decision::new(Position::CENTER, Rule::Center));
        }

        let corners: Vec<Position> = Position::CORNERS
            .into_iter()
            .filter(|pos| snapshot.is_empty(*pos))
            .collect();
        if let Some(&pos) = corners.choose(&mut self.rng) {
            return Some(Decision::new(pos, Rule::Corner));
        }

        empty
            .choose(&mut self.rng)
            .map(|&pos| Decision::new(pos, Rule::Fallback))
    }
}

/// First empty cell, row-major, where `mark` would complete a line.
fn completing_move(snapshot: &BoardSnapshot, empty: &[Position], mark: Mark) -> Option<Position> {
    empty.iter().copied().find(|&pos| {
        let scratch = snapshot.with_move(pos, mark);
        let wins = rules::has_line(scratch.cells(), mark);
        trace!(position = %pos, %mark, wins, "Simulated placement");
        wins
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Board;

    fn snap(text: &str) -> BoardSnapshot {
        text.parse::<Board>().unwrap().snapshot()
    }

    #[test]
    fn test_win_beats_block() {
        let mut ai = AiEngine::with_seed(Mark::O, 1);
        let d = ai.decide(&snap("XX./OO./..."), Difficulty::Hard).unwrap();
        assert_eq!(d, Decision::new(Position::MiddleRight, Rule::WinNow));
    }

    #[test]
    fn test_block() {
        let mut ai = AiEngine::with_seed(Mark::O, 1);
        let d = ai.decide(&snap("XX./O../..."), Difficulty::Hard).unwrap();
        assert_eq!(d, Decision::new(Position::TopRight, Rule::Block));
    }

    #[test]
    fn test_first_win_in_row_major_order() {
        // O can win at (0,2) via row0 and at (2,0) via col0.
        let mut ai = AiEngine::with_seed(Mark::O, 1);
        let d = ai.decide(&snap("OO./OXX/.X."), Difficulty::Hard).unwrap();
        assert_eq!(d, Decision::new(Position::TopRight, Rule::WinNow));
    }

    #[test]
    fn test_center_then_corner() {
        let mut ai = AiEngine::with_seed(Mark::O, 1);
        let d = ai.decide(&snap(".../.../..."), Difficulty::Hard).unwrap();
        assert_eq!(d, Decision::new(Position::Center, Rule::Center));

        let d = ai.decide(&snap(".../.X./..."), Difficulty::Hard).unwrap();
        assert_eq!(d.rule, Rule::Corner);
        assert!(Position::CORNERS.contains(&d.position));
    }

    #[test]
    fn test_fallback_when_only_edges_left() {
        // No threats, center and corners taken.
        let board = snap("X.O/OOX/X.O");
        let mut ai = AiEngine::with_seed(Mark::O, 3);
        for _ in 0..20 {
            let d = ai.decide(&board, Difficulty::Hard).unwrap();
            assert_eq!(d.rule, Rule::Fallback);
            assert!(matches!(d.position, Position::TopCenter | Position::BottomCenter));
        }
    }

    #[test]
    fn test_block_first_threat_in_row_major_order() {
        // X threatens (1,0) on col0 and (2,1) on row2.
        let mut ai = AiEngine::with_seed(Mark::O, 3);
        let d = ai.decide(&snap("X.O/.O./X.X"), Difficulty::Hard).unwrap();
        assert_eq!(d, Decision::new(Position::MiddleLeft, Rule::Block));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut ai = AiEngine::with_seed(Mark::O, 1);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(ai.select_move(&snap("XOX/OXX/OXO"), difficulty), None);
        }
    }

    #[test]
    fn test_never_picks_occupied() {
        let mut ai = AiEngine::with_seed(Mark::O, 99);
        let board = snap("XO./.X./O..");
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            for _ in 0..200 {
                let pos = ai.select_move(&board, difficulty).unwrap();
                assert!(board.is_empty(pos));
            }
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = snap("X../.../...");
        let mut a = AiEngine::with_seed(Mark::O, 42);
        let mut b = AiEngine::with_seed(Mark::O, 42);
        for _ in 0..50 {
            assert_eq!(
                a.select_move(&board, Difficulty::Easy),
                b.select_move(&board, Difficulty::Easy)
            );
        }
    }
}
