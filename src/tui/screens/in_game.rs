//! In-game screen: the board, the player's cursor and the AI's turns.
//!
//! The human always plays X and moves first. After each human move that
//! leaves the game open, the AI's reply becomes due once the thinking delay
//! has passed; [`Screen::tick`] applies it.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument, warn};

use crate::ai::{AiEngine, Difficulty};
use crate::games::tictactoe::{GameSession, Mark, Move, Position, SessionStatus};
use crate::tui::input::{keypad_position, move_cursor};
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::ui::draw_board;

/// In-game screen shown while a session is running.
#[derive(Debug, Getters)]
pub struct InGameScreen {
    /// The game being played.
    session: GameSession,
    #[getter(skip)]
    engine: AiEngine,
    /// Highlighted cell for keyboard play.
    cursor: Position,
    /// Pause before the AI's move is applied.
    ai_delay: Duration,
    /// When the pending AI move should be applied.
    ai_due: Option<Instant>,
    /// Feedback for the last rejected input.
    message: Option<String>,
}

impl InGameScreen {
    /// Starts a new game against `engine` at `difficulty`.
    #[instrument(skip(engine))]
    pub fn new(difficulty: Difficulty, engine: AiEngine, ai_delay: Duration) -> Self {
        let mut session = GameSession::new(difficulty);
        session.start();
        Self {
            session,
            engine,
            cursor: Position::CENTER,
            ai_delay,
            ai_due: None,
            message: None,
        }
    }

    /// Status line for the current state.
    pub fn status_text(&self) -> &'static str {
        match self.session.status() {
            SessionStatus::PlayerWon => "You Win!",
            SessionStatus::OpponentWon => "AI Wins!",
            SessionStatus::Draw => "Draw!",
            SessionStatus::InProgress if *self.session.to_move() == Mark::X => "Your Turn",
            SessionStatus::InProgress => "AI Thinking...",
            SessionStatus::NotStarted => "Press r to start",
        }
    }

    /// Places the player's mark at `pos`, scheduling the AI's reply.
    #[instrument(skip(self, now))]
    fn play_human(&mut self, pos: Position, now: Instant) {
        if self.ai_due.is_some() {
            debug!("Input ignored while the AI is thinking");
            return;
        }

        match self.session.play(Move::new(Mark::X, pos)) {
            Ok(SessionStatus::InProgress) => {
                self.message = None;
                self.ai_due = Some(now + self.ai_delay);
            }
            Ok(status) => {
                self.message = None;
                info!(?status, "Game finished on player move");
            }
            Err(e) => {
                debug!(error = %e, "Player move rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Clears the board and starts over at the same tier.
    #[instrument(skip(self))]
    fn restart(&mut self) {
        info!("Restarting game");
        self.session.reset();
        self.session.start();
        self.cursor = Position::CENTER;
        self.ai_due = None;
        self.message = None;
    }
}

impl Screen for InGameScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(11),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new(format!("Tic Tac Toe - {}", self.session.difficulty().label()))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let cursor = (*self.session.status() == SessionStatus::InProgress).then_some(self.cursor);
        draw_board(frame, chunks[1], self.session.board(), cursor, self.session.winning_line());

        let (status, color) = match self.session.status() {
            SessionStatus::PlayerWon => (self.status_text(), Color::Green),
            SessionStatus::OpponentWon => (self.status_text(), Color::Red),
            SessionStatus::InProgress if *self.session.to_move() == Mark::X => {
                (self.status_text(), Color::Blue)
            }
            SessionStatus::InProgress => (self.status_text(), Color::Red),
            _ => (self.status_text(), Color::White),
        };
        let status_line = match &self.message {
            Some(message) => format!("{status} ({message})"),
            None => status.to_string(),
        };
        let status_widget = Paragraph::new(status_line)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status_widget, chunks[2]);

        let help = Paragraph::new(
            "←↑↓→: Move | Enter: Place | 1-9: Place | r: Restart | m: Menu | q: Quit",
        )
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        let now = Instant::now();
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play_human(self.cursor, now);
                ScreenTransition::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.restart();
                ScreenTransition::Stay
            }
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => ScreenTransition::GoToMenu,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            code => {
                if let Some(pos) = keypad_position(code) {
                    self.cursor = pos;
                    self.play_human(pos, now);
                }
                ScreenTransition::Stay
            }
        }
    }

    fn tick(&mut self, now: Instant) -> ScreenTransition {
        let Some(due) = self.ai_due else {
            return ScreenTransition::Stay;
        };
        if now < due {
            return ScreenTransition::Stay;
        }

        self.ai_due = None;
        match self.session.play_ai(&mut self.engine) {
            Ok(Some(mv)) => debug!(%mv, "AI moved"),
            Ok(None) => warn!("AI had no move on an open board"),
            Err(e) => warn!(error = %e, "AI move rejected"),
        }
        ScreenTransition::Stay
    }
}
