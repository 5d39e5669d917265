//! Fullness and empty-cell enumeration.

use super::super::{Cell, Position};

/// Checks if every cell is occupied.
///
/// A full board with no winner is a draw.
pub fn is_full(cells: &[Cell; 9]) -> bool {
    cells.iter().all(|c| *c != Cell::Empty)
}

/// Empty cells in row-major order.
pub fn empty_cells(cells: &[Cell; 9]) -> impl Iterator<Item = Position> + '_ {
    Position::ALL
        .into_iter()
        .filter(move |pos| cells[pos.to_index()] == Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::{WinResult, check_winner};
    use super::*;
    use crate::games::tictactoe::Board;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(board.cells()));
        assert_eq!(empty_cells(board.cells()).count(), 9);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board: Board = ".X./O.X/..O".parse().unwrap();
        let empties: Vec<Position> = empty_cells(board.cells()).collect();
        assert_eq!(
            empties,
            vec![
                Position::TopLeft,
                Position::TopRight,
                Position::Center,
                Position::BottomLeft,
                Position::BottomCenter,
            ]
        );
    }

    #[test]
    fn test_full_iff_no_empty_cells() {
        for text in ["XOX/OXO/OXO", "XOX/OX./OXO", ".../.../..."] {
            let board: Board = text.parse().unwrap();
            assert_eq!(is_full(board.cells()), empty_cells(board.cells()).next().is_none());
        }
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_full(board.cells()));
        assert_eq!(check_winner(board.cells()), WinResult::Draw);
    }

    #[test]
    fn test_not_draw_if_winner_on_full_board() {
        let board: Board = "XXX/OOX/XOO".parse().unwrap();
        assert!(is_full(board.cells()));
        assert!(matches!(check_winner(board.cells()), WinResult::Winner { .. }));
    }
}
