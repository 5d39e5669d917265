//! Tests for the board and win/draw detection.

use tictactoe_duel::{Board, Cell, Line, Mark, Position, WinResult, rules};

fn board(text: &str) -> Board {
    text.parse().unwrap()
}

#[test]
fn test_row_win_reports_line() {
    let result = board("XXX/OO./...").check_winner();
    assert_eq!(
        result,
        WinResult::Winner {
            mark: Mark::X,
            line: Line::Row0
        }
    );
    assert_eq!(result.winner(), Some(Mark::X));
    assert_eq!(result.line(), Some(Line::Row0));
}

#[test]
fn test_column_and_diagonal_wins() {
    assert_eq!(board("O.X/O.X/O..").check_winner().line(), Some(Line::Col0));
    assert_eq!(board("X.O/.XO/O.X").check_winner().line(), Some(Line::DiagMain));
    assert_eq!(board("X.O/.O./OX.").check_winner().line(), Some(Line::DiagAnti));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let b = board("XOX/XOO/OXX");
    assert!(b.is_full());
    assert_eq!(b.check_winner(), WinResult::Draw);
    assert!(b.check_winner().is_terminal());
}

#[test]
fn test_win_on_last_cell_beats_draw() {
    let b = board("XOX/OXO/OXX");
    assert!(b.is_full());
    assert_eq!(b.check_winner().winner(), Some(Mark::X));
}

#[test]
fn test_open_board_has_no_winner() {
    let b = board("XO./.X./..O");
    assert_eq!(b.check_winner(), WinResult::NoWinner);
    assert!(!b.check_winner().is_terminal());
}

#[test]
fn test_check_winner_is_pure() {
    let b = board("XX./OO./...");
    let before = b.clone();
    let _ = b.check_winner();
    let _ = b.check_winner();
    assert_eq!(b, before);
}

#[test]
fn test_apply_move_out_of_range_leaves_board() {
    let mut b = board("X../.../...");
    let before = b.clone();
    assert!(!b.apply_move(3, 1, Mark::O));
    assert!(!b.apply_move(0, 7, Mark::O));
    assert_eq!(b, before);
}

#[test]
fn test_is_full_iff_no_empty_cells() {
    let mut b = Board::new();
    let marks = [Mark::X, Mark::O];
    for (i, pos) in Position::ALL.into_iter().enumerate() {
        assert_eq!(b.is_full(), b.empty_cells().next().is_none());
        assert!(b.apply_move(pos.row(), pos.col(), marks[i % 2]));
    }
    assert!(b.is_full());
    assert_eq!(b.empty_cells().count(), 0);

    b.reset();
    assert!(!b.is_full());
    assert!(b.cells().iter().all(|c| *c == Cell::Empty));
}

#[test]
fn test_empty_cells_row_major() {
    let b = board("X.O/.X./O..");
    let empty: Vec<Position> = b.empty_cells().collect();
    assert_eq!(
        empty,
        vec![
            Position::TopCenter,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomRight,
        ]
    );
}

#[test]
fn test_has_line_per_mark() {
    let b = board("OOO/XX./X..");
    assert!(rules::has_line(b.cells(), Mark::O));
    assert!(!rules::has_line(b.cells(), Mark::X));
}
