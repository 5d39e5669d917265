//! Tictactoe Duel library - tic-tac-toe rules and a tiered AI opponent
//!
//! # Architecture
//!
//! - **Games**: board, win/draw detection, session lifecycle
//! - **AI**: Easy / Medium / Hard move selection over board snapshots
//! - **TUI**: menu and board screens driving a session in the terminal
//! - **Simulate**: headless AI-vs-AI batches
//!
//! # Example
//!
//! ```
//! use tictactoe_duel::{AiEngine, Difficulty, GameSession, Mark, Move, Position};
//!
//! let mut session = GameSession::new(Difficulty::Hard);
//! session.start();
//! session.play(Move::new(Mark::X, Position::TopLeft)).unwrap();
//!
//! let mut ai = AiEngine::with_seed(Mark::O, 1);
//! let reply = session.play_ai(&mut ai).unwrap();
//! assert_eq!(reply, Some(Move::new(Mark::O, Position::Center)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod ai;
mod config;
mod games;
mod simulate;
mod tui;

// Crate-level exports - AI
pub use ai::{AiEngine, Decision, Difficulty, MEDIUM_BEST_MOVE_PROBABILITY, Rule};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, BoardSnapshot, Cell, GameSession, Line, Mark, Move, MoveError,
    Position, SessionStatus, WinResult, rules,
};

// Crate-level exports - Simulation
pub use simulate::{SimulationConfig, SimulationReport, simulate};

// Crate-level exports - Terminal UI
pub use tui::{InGameScreen, MenuScreen, Screen, ScreenTransition, TuiController, run_tui};
