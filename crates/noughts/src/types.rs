//! Core domain types: marks, cells, and the 3x3 board.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two symbols a player places on the board.
///
/// `X` moves first in every game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// The first mover.
    X,
    /// The second mover.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

/// 3x3 board, indexed 0-8 in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells.
    pub const SIZE: usize = 9;
    /// Index of the center cell.
    pub const CENTER: usize = 4;
    /// Indices of the four corner cells.
    pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Creates a board from an explicit cell array.
    ///
    /// The board is not validated against the alternating-turn discipline;
    /// it only ever needs to hold what a caller hands it.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `index`, or `None` when out of range.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns the mark occupying `index`, if any.
    pub fn mark_at(&self, index: usize) -> Option<Mark> {
        match self.cell(index) {
            Some(Cell::Occupied(mark)) => Some(mark),
            _ => None,
        }
    }

    /// True when `index` is in range and unoccupied.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.cell(index), Some(Cell::Empty))
    }

    /// True when `index` holds `mark`.
    pub fn owned_by(&self, index: usize, mark: Mark) -> bool {
        self.mark_at(index) == Some(mark)
    }

    /// True when every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Indices of all unoccupied cells, in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| i)
    }

    /// All cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Writes `cell` at `index`. Callers validate range and occupancy first.
    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        debug_assert!(index < Self::SIZE);
        self.cells[index] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Renders the grid with cell numbers (1-9) standing in for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Occupied(mark) => write!(f, "{mark}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
        }
        Ok(())
    }
}
