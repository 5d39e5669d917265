//! Tests for full games driven through a session.

use tictactoe_duel::{
    AiEngine, Difficulty, GameSession, Line, Mark, Move, MoveError, Position, SessionStatus,
    SimulationConfig, simulate,
};

#[test]
fn test_player_wins_against_easy_script() {
    let mut session = GameSession::new(Difficulty::Easy);
    session.start();

    let moves = [
        Move::new(Mark::X, Position::TopLeft),
        Move::new(Mark::O, Position::MiddleLeft),
        Move::new(Mark::X, Position::TopCenter),
        Move::new(Mark::O, Position::Center),
        Move::new(Mark::X, Position::TopRight),
    ];
    let mut status = SessionStatus::InProgress;
    for mv in moves {
        status = session.play(mv).unwrap();
    }

    assert_eq!(status, SessionStatus::PlayerWon);
    assert_eq!(session.winning_line(), Some(Line::Row0));
    assert_eq!(
        session.play(Move::new(Mark::O, Position::BottomLeft)),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_hard_ai_never_loses_to_naive_player() {
    // The player always takes the first empty cell.
    for seed in 0..20 {
        let mut session = GameSession::new(Difficulty::Hard);
        session.start();
        let mut ai = AiEngine::with_seed(Mark::O, seed);

        while !session.status().is_terminal() {
            let pos = session.board().empty_cells().next().unwrap();
            session.play(Move::new(Mark::X, pos)).unwrap();
            if !session.status().is_terminal() {
                session.play_ai(&mut ai).unwrap();
            }
        }
        assert_ne!(*session.status(), SessionStatus::PlayerWon, "seed {seed}");
    }
}

#[test]
fn test_reset_starts_over() {
    let mut session = GameSession::new(Difficulty::Medium);
    session.start();
    session.play(Move::new(Mark::X, Position::Center)).unwrap();

    session.reset();
    assert_eq!(*session.status(), SessionStatus::NotStarted);
    assert_eq!(*session.difficulty(), Difficulty::Medium);
    assert!(session.history().is_empty());
    assert_eq!(session.board().empty_cells().count(), 9);
}

#[test]
fn test_simulation_tallies_every_game() {
    let report = simulate(&SimulationConfig::new(Difficulty::Medium, Difficulty::Hard, 50, 3));
    assert_eq!(*report.games(), 50);
    assert_eq!(report.x_wins() + report.o_wins() + report.draws(), 50);
    assert!(*report.total_moves() >= 50 * 5);
}
