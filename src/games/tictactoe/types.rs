//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use super::rules::{self, WinResult};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// The human player's mark (moves first).
    X,
    /// The AI opponent's mark.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Mark::X) => 'X',
            Cell::Occupied(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells only go from `Empty` to `Occupied`; the single way back is
/// [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from rows, without any legality checks.
    ///
    /// Useful for injecting positions that can't arise in play.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (r, row) in rows.iter().enumerate() {
            cells[r * 3..r * 3 + 3].copy_from_slice(row);
        }
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at (row, col), `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        Position::from_row_col(row, col).map(|pos| self.get(pos))
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Places `mark` at `pos` if the cell is empty.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        self.cells[pos.to_index()] = Cell::Occupied(mark);
        Ok(())
    }

    /// Places `mark` at (row, col), rejecting out-of-range and occupied cells.
    pub fn try_place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        let pos = Position::from_row_col(row, col).ok_or(MoveError::InvalidCell { row, col })?;
        self.place(pos, mark)
    }

    /// Applies a move, returning `false` (and leaving the board untouched)
    /// when the target is out of range or occupied.
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        match self.try_place(row, col, mark) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "Move rejected");
                false
            }
        }
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        rules::empty_cells(&self.cells)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.cells)
    }

    /// Evaluates the board. Recomputed on every call.
    pub fn check_winner(&self) -> WinResult {
        rules::check_winner(&self.cells)
    }

    /// Copies the grid for evaluation away from the live board.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot { cells: self.cells }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }
}

impl From<[[Cell; 3]; 3]> for Board {
    fn from(rows: [[Cell; 3]; 3]) -> Self {
        Self::from_rows(rows)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_grid(f, &self.cells)
    }
}

fn write_grid(f: &mut std::fmt::Formatter<'_>, cells: &[Cell; 9]) -> std::fmt::Result {
    for row in 0..3 {
        let base = row * 3;
        write!(
            f,
            "{}|{}|{}",
            cells[base].symbol(),
            cells[base + 1].symbol(),
            cells[base + 2].symbol()
        )?;
        if row < 2 {
            write!(f, "\n-+-+-\n")?;
        }
    }
    Ok(())
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// Not exactly three rows of three cells.
    #[display("Expected 3 rows of 3 cells separated by '/'")]
    Shape,
    /// Unknown cell character.
    #[display("Unknown cell character {_0:?}")]
    Symbol(char),
}

impl std::error::Error for BoardParseError {}

/// Parses `"XX./OO./..."`: rows separated by `/`, `X`/`O` for marks,
/// `.` or `_` for empty cells.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != 3 {
            return Err(BoardParseError::Shape);
        }

        let mut grid = [[Cell::Empty; 3]; 3];
        for (r, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.trim().chars().collect();
            if chars.len() != 3 {
                return Err(BoardParseError::Shape);
            }
            for (c, ch) in chars.into_iter().enumerate() {
                grid[r][c] = match ch {
                    'X' | 'x' => Cell::Occupied(Mark::X),
                    'O' | 'o' => Cell::Occupied(Mark::O),
                    '.' | '_' => Cell::Empty,
                    other => return Err(BoardParseError::Symbol(other)),
                };
            }
        }
        Ok(Board::from_rows(grid))
    }
}

/// Read-only copy of a board's grid.
///
/// The AI evaluates hypothetical moves on scratch copies made from a
/// snapshot, so nothing it does can reach the live [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    cells: [Cell; 9],
}

impl BoardSnapshot {
    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at (row, col), `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        Position::from_row_col(row, col).map(|pos| self.get(pos))
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        rules::empty_cells(&self.cells)
    }

    /// Checks if the grid is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.cells)
    }

    /// Evaluates the grid.
    pub fn check_winner(&self) -> WinResult {
        rules::check_winner(&self.cells)
    }

    /// Returns a scratch copy with `mark` written at `pos`.
    ///
    /// The snapshot itself is untouched; drop the copy once evaluated.
    pub fn with_move(&self, pos: Position, mark: Mark) -> BoardSnapshot {
        let mut scratch = *self;
        scratch.cells[pos.to_index()] = Cell::Occupied(mark);
        scratch
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        board.snapshot()
    }
}

impl std::fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_grid(f, &self.cells)
    }
}
