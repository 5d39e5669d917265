//! Menu screen: choose a difficulty and start a game.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::ai::Difficulty;
use crate::tui::screen::{Screen, ScreenTransition};

/// Entries on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Tier(Difficulty),
    Start,
    Quit,
}

impl MenuOption {
    fn all() -> &'static [MenuOption] {
        &[
            Self::Tier(Difficulty::Easy),
            Self::Tier(Difficulty::Medium),
            Self::Tier(Difficulty::Hard),
            Self::Start,
            Self::Quit,
        ]
    }
}

/// State for the menu screen.
#[derive(Debug, Getters)]
pub struct MenuScreen {
    /// Tier a game will start with.
    difficulty: Difficulty,
    #[getter(skip)]
    list_state: ListState,
}

impl MenuScreen {
    /// Creates a menu with `difficulty` preselected and the cursor on Start.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        debug!("Initializing MenuScreen");
        let mut list_state = ListState::default();
        let start = MenuOption::all()
            .iter()
            .position(|opt| *opt == MenuOption::Start);
        list_state.select(start);
        Self {
            difficulty,
            list_state,
        }
    }

    fn select_previous(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_option(&self) -> MenuOption {
        let options = MenuOption::all();
        let idx = self.list_state.selected().unwrap_or(0);
        options[idx.min(options.len() - 1)]
    }

    fn choose(&mut self, difficulty: Difficulty) {
        debug!(%difficulty, "Difficulty chosen");
        self.difficulty = difficulty;
    }

    fn label(&self, option: MenuOption) -> String {
        match option {
            MenuOption::Tier(d) => {
                let marker = if d == self.difficulty { "(•)" } else { "( )" };
                format!("{} {}", marker, d.label())
            }
            MenuOption::Start => "Start Game".to_string(),
            MenuOption::Quit => "Quit".to_string(),
        }
    }
}

impl Screen for MenuScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(7),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Tic Tac Toe - Choose Your Opponent")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = MenuOption::all()
            .iter()
            .map(|opt| ListItem::new(self.label(*opt)))
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, chunks[1], &mut list_state);

        let help = Paragraph::new(
            "↑↓: Navigate | Enter: Select | e/m/h: Difficulty | s: Start | q: Quit",
        )
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.selected_option() {
                MenuOption::Tier(d) => {
                    self.choose(d);
                    ScreenTransition::Stay
                }
                MenuOption::Start => {
                    info!(difficulty = %self.difficulty, "Starting game from menu");
                    ScreenTransition::StartGame {
                        difficulty: self.difficulty,
                    }
                }
                MenuOption::Quit => ScreenTransition::Quit,
            },
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.choose(Difficulty::Easy);
                ScreenTransition::Stay
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                self.choose(Difficulty::Medium);
                ScreenTransition::Stay
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                self.choose(Difficulty::Hard);
                ScreenTransition::Stay
            }
            KeyCode::Char('s') | KeyCode::Char('S') => ScreenTransition::StartGame {
                difficulty: self.difficulty,
            },
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
