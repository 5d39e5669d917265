//! Screen implementations for the TUI state machine.

mod in_game;
mod menu;

pub use in_game::InGameScreen;
pub use menu::MenuScreen;
