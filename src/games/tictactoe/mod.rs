//! Tic-tac-toe rules: board, win/draw detection and the session lifecycle.

mod action;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use position::Position;
pub use rules::{Line, WinResult};
pub use session::{GameSession, SessionStatus};
pub use types::{Board, BoardParseError, BoardSnapshot, Cell, Mark};
