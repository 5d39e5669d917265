//! Terminal UI: difficulty menu and game board.

mod controller;
mod input;
mod screen;
mod screens;
mod ui;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};

use crate::config::GameConfig;

pub use controller::TuiController;
pub use screen::{Screen, ScreenTransition};
pub use screens::{InGameScreen, MenuScreen};

/// Sets up the terminal, runs the game until the user quits, and restores
/// the terminal even when the loop fails.
pub async fn run_tui(config: GameConfig) -> anyhow::Result<()> {
    info!("Starting Tictactoe Duel TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = TuiController::new(config);
    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}
