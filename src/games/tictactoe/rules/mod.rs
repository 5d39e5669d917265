//! Game rules for tic-tac-toe.
//!
//! Pure functions over a row-major grid of cells. Both [`Board`](super::Board)
//! and [`BoardSnapshot`](super::BoardSnapshot) delegate here, so the live
//! board and the AI's scratch copies are judged by the same code.

pub mod draw;
pub mod win;

pub use draw::{empty_cells, is_full};
pub use win::{Line, WinResult, check_winner, has_line};
