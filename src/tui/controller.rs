//! TUI controller: the state machine driving menu and game screens.

use std::time::Instant;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Terminal, backend::Backend};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};

use crate::ai::{AiEngine, Difficulty};
use crate::config::GameConfig;
use crate::games::tictactoe::Mark;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{InGameScreen, MenuScreen};

/// Active screen in the TUI state machine.
#[derive(Debug)]
enum ActiveScreen {
    Menu(MenuScreen),
    InGame(Box<InGameScreen>),
}

impl ActiveScreen {
    fn screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::Menu(s) => s,
            ActiveScreen::InGame(s) => s.as_ref(),
        }
    }

    fn screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Menu(s) => s,
            ActiveScreen::InGame(s) => s.as_mut(),
        }
    }
}

/// Feeds one polled key to the screen, then ticks it unless the key
/// already produced a transition.
fn step(screen: &mut ActiveScreen, key: Option<KeyEvent>, now: Instant) -> ScreenTransition {
    let mut transition = ScreenTransition::Stay;
    // Skip key release events (crossterm fires both press and release).
    if let Some(key) = key
        && key.kind != KeyEventKind::Release
    {
        transition = screen.screen_mut().handle_key(key);
    }

    if transition == ScreenTransition::Stay {
        transition = screen.screen_mut().tick(now);
    }
    transition
}

/// Controller that drives the TUI state machine.
///
/// Call [`TuiController::run`] to start the event loop.
#[derive(Debug, Getters)]
pub struct TuiController {
    /// Settings for every game started from the menu.
    config: GameConfig,
    /// Games started so far; offsets the configured seed per game.
    games_started: u64,
}

impl TuiController {
    /// Creates a new controller.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        info!("Creating TuiController");
        Self {
            config,
            games_started: 0,
        }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting TUI event loop");

        let mut screen = ActiveScreen::Menu(MenuScreen::new(*self.config.difficulty()));

        loop {
            terminal.draw(|f| screen.screen().render(f))?;

            // Poll for input with short timeout to keep the loop responsive.
            let key = if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                Some(key)
            } else {
                None
            };
            let transition = step(&mut screen, key, Instant::now());

            screen = match self.apply_transition(transition, screen) {
                Some(next) => next,
                None => {
                    info!("TUI quitting");
                    return Ok(());
                }
            };

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        match transition {
            ScreenTransition::Stay => Some(current),

            ScreenTransition::GoToMenu => {
                let difficulty = match &current {
                    ActiveScreen::InGame(s) => *s.session().difficulty(),
                    ActiveScreen::Menu(s) => *s.difficulty(),
                };
                info!(%difficulty, "Navigating to Menu");
                Some(ActiveScreen::Menu(MenuScreen::new(difficulty)))
            }

            ScreenTransition::StartGame { difficulty } => {
                info!(%difficulty, "Navigating to InGame");
                let engine = self.next_engine();
                Some(ActiveScreen::InGame(Box::new(InGameScreen::new(
                    difficulty,
                    engine,
                    self.config.ai_delay(),
                ))))
            }

            ScreenTransition::Quit => None,
        }
    }

    /// Builds the AI for the next game.
    fn next_engine(&mut self) -> AiEngine {
        let game = self.games_started;
        self.games_started += 1;
        match self.config.seed() {
            Some(seed) => {
                debug!(seed, game, "Seeding AI");
                AiEngine::with_seed(Mark::O, seed.wrapping_add(game))
            }
            None => AiEngine::new(Mark::O),
        }
    }

    /// Returns the difficulty a fresh menu would preselect.
    pub fn default_difficulty(&self) -> Difficulty {
        *self.config.difficulty()
    }
}
