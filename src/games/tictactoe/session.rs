//! Turn-based game session.
//!
//! A session owns the live [`Board`] and walks the lifecycle
//! `NotStarted -> InProgress -> {PlayerWon, OpponentWon, Draw}`. The AI only
//! ever sees a [`BoardSnapshot`](super::BoardSnapshot); its chosen move comes
//! back through [`GameSession::play`] like any other.

use super::action::{Move, MoveError};
use super::rules::{Line, WinResult};
use super::{Board, Mark};
use crate::ai::{AiEngine, Difficulty};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Created or reset; no moves accepted yet.
    NotStarted,
    /// Moves are being played.
    InProgress,
    /// X completed a line.
    PlayerWon,
    /// O completed a line.
    OpponentWon,
    /// Board filled with no line completed.
    Draw,
}

impl SessionStatus {
    /// True once the game has been won or drawn.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SessionStatus::PlayerWon | SessionStatus::OpponentWon | SessionStatus::Draw
        )
    }
}

/// A single game between the player (X) and the opponent (O).
#[derive(Debug, Clone, Getters)]
pub struct GameSession {
    /// The live board.
    board: Board,
    /// AI tier, fixed for the session.
    difficulty: Difficulty,
    /// Mark to move next.
    to_move: Mark,
    /// Lifecycle state.
    status: SessionStatus,
    /// Accepted moves, oldest first.
    history: Vec<Move>,
    /// Result of the last evaluation.
    outcome: WinResult,
}

impl GameSession {
    /// Creates a session that has not started yet.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            difficulty,
            to_move: Mark::X,
            status: SessionStatus::NotStarted,
            history: Vec::new(),
            outcome: WinResult::NoWinner,
        }
    }

    /// Moves a fresh session into play. Ignored in any other state.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn start(&mut self) {
        if self.status == SessionStatus::NotStarted {
            info!(difficulty = %self.difficulty, "Session started");
            self.status = SessionStatus::InProgress;
        }
    }

    /// Plays a move.
    ///
    /// On rejection nothing changes: not the board, not the turn. On success
    /// the board is re-evaluated and the session goes terminal as soon as a
    /// line is completed or the board fills.
    #[instrument(skip(self), fields(status = ?self.status, to_move = %self.to_move))]
    pub fn play(&mut self, mv: Move) -> Result<SessionStatus, MoveError> {
        match self.status {
            SessionStatus::NotStarted => return Err(MoveError::NotStarted),
            SessionStatus::InProgress => {}
            _ => return Err(MoveError::GameOver),
        }

        if mv.mark != self.to_move {
            warn!(mark = %mv.mark, "Move out of turn");
            return Err(MoveError::WrongTurn(mv.mark));
        }

        self.board.place(mv.position, mv.mark).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;
        self.history.push(mv);
        debug!(%mv, "Move applied");

        self.outcome = self.board.check_winner();
        self.status = match self.outcome {
            WinResult::Winner { mark: Mark::X, .. } => SessionStatus::PlayerWon,
            WinResult::Winner { mark: Mark::O, .. } => SessionStatus::OpponentWon,
            WinResult::Draw => SessionStatus::Draw,
            WinResult::NoWinner => {
                self.to_move = self.to_move.opponent();
                SessionStatus::InProgress
            }
        };

        if self.status.is_terminal() {
            info!(outcome = %self.outcome, moves = self.history.len(), "Game over");
        }
        Ok(self.status)
    }

    /// Asks `engine` for a move on a snapshot and plays it.
    ///
    /// Returns `Ok(None)` when the engine has nothing to play.
    #[instrument(skip(self, engine))]
    pub fn play_ai<R: Rng>(
        &mut self,
        engine: &mut AiEngine<R>,
    ) -> Result<Option<Move>, MoveError> {
        match self.status {
            SessionStatus::NotStarted => return Err(MoveError::NotStarted),
            SessionStatus::InProgress => {}
            _ => return Err(MoveError::GameOver),
        }
        if engine.mark() != self.to_move {
            return Err(MoveError::WrongTurn(engine.mark()));
        }

        let Some(position) = engine.select_move(&self.board.snapshot(), self.difficulty) else {
            return Ok(None);
        };
        let mv = Move::new(engine.mark(), position);
        self.play(mv)?;
        Ok(Some(mv))
    }

    /// Clears the board and returns to `NotStarted`. Difficulty is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Session reset");
        self.board.reset();
        self.to_move = Mark::X;
        self.status = SessionStatus::NotStarted;
        self.history.clear();
        self.outcome = WinResult::NoWinner;
    }

    /// The completed line, once someone has won.
    pub fn winning_line(&self) -> Option<Line> {
        self.outcome.line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    fn started() -> GameSession {
        let mut session = GameSession::new(Difficulty::Hard);
        session.start();
        session
    }

    #[test]
    fn test_moves_rejected_before_start() {
        let mut session = GameSession::new(Difficulty::Easy);
        assert_eq!(
            session.play(Move::new(Mark::X, Position::Center)),
            Err(MoveError::NotStarted)
        );
        assert_eq!(session.board().empty_cells().count(), 9);
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = started();
        session.play(Move::new(Mark::X, Position::Center)).unwrap();
        assert_eq!(*session.to_move(), Mark::O);
        session.play(Move::new(Mark::O, Position::TopLeft)).unwrap();
        assert_eq!(*session.to_move(), Mark::X);
    }

    #[test]
    fn test_rejection_keeps_turn() {
        let mut session = started();
        session.play(Move::new(Mark::X, Position::Center)).unwrap();

        let err = session.play(Move::new(Mark::O, Position::Center));
        assert_eq!(err, Err(MoveError::CellOccupied(Position::Center)));
        assert_eq!(*session.to_move(), Mark::O);

        let err = session.play(Move::new(Mark::X, Position::TopLeft));
        assert_eq!(err, Err(MoveError::WrongTurn(Mark::X)));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_win_is_terminal() {
        let mut session = started();
        for (mark, pos) in [
            (Mark::X, Position::TopLeft),
            (Mark::O, Position::MiddleLeft),
            (Mark::X, Position::TopCenter),
            (Mark::O, Position::Center),
        ] {
            assert_eq!(session.play(Move::new(mark, pos)), Ok(SessionStatus::InProgress));
        }
        assert_eq!(
            session.play(Move::new(Mark::X, Position::TopRight)),
            Ok(SessionStatus::PlayerWon)
        );
        assert_eq!(session.winning_line(), Some(Line::Row0));
        assert_eq!(
            session.play(Move::new(Mark::O, Position::BottomRight)),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_reset_returns_to_not_started() {
        let mut session = started();
        session.play(Move::new(Mark::X, Position::Center)).unwrap();
        session.reset();
        assert_eq!(*session.status(), SessionStatus::NotStarted);
        assert_eq!(*session.to_move(), Mark::X);
        assert!(session.history().is_empty());
        assert!(!session.board().is_full());
        assert_eq!(session.board().check_winner(), WinResult::NoWinner);
        assert_eq!(*session.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_play_ai_takes_center_on_hard() {
        let mut session = started();
        session.play(Move::new(Mark::X, Position::TopLeft)).unwrap();
        let mut engine = AiEngine::with_seed(Mark::O, 7);
        let mv = session.play_ai(&mut engine).unwrap();
        assert_eq!(mv, Some(Move::new(Mark::O, Position::Center)));
        assert_eq!(*session.to_move(), Mark::X);
    }

    #[test]
    fn test_play_ai_out_of_turn() {
        let mut session = started();
        let mut engine = AiEngine::with_seed(Mark::O, 7);
        assert_eq!(session.play_ai(&mut engine), Err(MoveError::WrongTurn(Mark::O)));
        assert!(session.history().is_empty());
    }
}
