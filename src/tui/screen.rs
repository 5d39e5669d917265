//! Screen trait and transition type for the TUI state machine.

use crate::ai::Difficulty;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use std::time::Instant;

/// The result of handling an input event or a tick on a screen.
///
/// Screens return this to drive the [`TuiController`](super::TuiController).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Return to the difficulty menu.
    GoToMenu,
    /// Start a game at the given tier.
    StartGame {
        /// Tier chosen on the menu.
        difficulty: Difficulty,
    },
    /// Exit the application.
    Quit,
}

/// Trait implemented by each screen.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;

    /// Advances time-driven state. Called once per loop iteration.
    fn tick(&mut self, _now: Instant) -> ScreenTransition {
        ScreenTransition::Stay
    }
}
