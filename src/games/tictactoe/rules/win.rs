//! Win detection logic for tic-tac-toe.

use super::super::{Cell, Mark, Position};
use super::draw::is_full;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// One of the 8 three-cell lines that win when uniformly occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Line {
    /// Top row.
    #[display("row0")]
    Row0,
    /// Middle row.
    #[display("row1")]
    Row1,
    /// Bottom row.
    #[display("row2")]
    Row2,
    /// Left column.
    #[display("col0")]
    Col0,
    /// Middle column.
    #[display("col1")]
    Col1,
    /// Right column.
    #[display("col2")]
    Col2,
    /// Top-left to bottom-right.
    #[display("diag1")]
    DiagMain,
    /// Top-right to bottom-left.
    #[display("diag2")]
    DiagAnti,
}

impl Line {
    /// Scan order: rows, then columns, then diagonals.
    pub const ALL: [Line; 8] = [
        Line::Row0,
        Line::Row1,
        Line::Row2,
        Line::Col0,
        Line::Col1,
        Line::Col2,
        Line::DiagMain,
        Line::DiagAnti,
    ];

    /// The three cells of this line.
    pub fn cells(self) -> [Position; 3] {
        use Position::*;

        match self {
            Line::Row0 => [TopLeft, TopCenter, TopRight],
            Line::Row1 => [MiddleLeft, Center, MiddleRight],
            Line::Row2 => [BottomLeft, BottomCenter, BottomRight],
            Line::Col0 => [TopLeft, MiddleLeft, BottomLeft],
            Line::Col1 => [TopCenter, Center, BottomCenter],
            Line::Col2 => [TopRight, MiddleRight, BottomRight],
            Line::DiagMain => [TopLeft, Center, BottomRight],
            Line::DiagAnti => [TopRight, Center, BottomLeft],
        }
    }

    /// Checks whether `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.cells().contains(&pos)
    }
}

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinResult {
    /// Game still open.
    NoWinner,
    /// Board full, nobody completed a line.
    Draw,
    /// `mark` completed `line`.
    Winner {
        /// The winning mark.
        mark: Mark,
        /// The first completed line in scan order.
        line: Line,
    },
}

impl WinResult {
    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            WinResult::Winner { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line, if any.
    pub fn line(&self) -> Option<Line> {
        match self {
            WinResult::Winner { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// True for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WinResult::NoWinner)
    }
}

impl std::fmt::Display for WinResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinResult::NoWinner => write!(f, "No winner"),
            WinResult::Draw => write!(f, "Draw"),
            WinResult::Winner { mark, line } => write!(f, "{} wins on {}", mark, line),
        }
    }
}

/// Evaluates a grid.
///
/// Lines are scanned in [`Line::ALL`] order and the first uniformly
/// occupied one is reported, so a grid with two complete lines always
/// names the earlier one. Otherwise the grid is a draw when full.
pub fn check_winner(cells: &[Cell; 9]) -> WinResult {
    for line in Line::ALL {
        let [a, b, c] = line.cells().map(|pos| cells[pos.to_index()]);
        if let Cell::Occupied(mark) = a
            && a == b
            && b == c
        {
            return WinResult::Winner { mark, line };
        }
    }

    if is_full(cells) {
        WinResult::Draw
    } else {
        WinResult::NoWinner
    }
}

/// Checks whether `mark` occupies any complete line, wherever it is in
/// scan order.
pub fn has_line(cells: &[Cell; 9], mark: Mark) -> bool {
    Line::ALL.iter().any(|line| {
        line.cells()
            .iter()
            .all(|pos| cells[pos.to_index()] == Cell::Occupied(mark))
    })
}
