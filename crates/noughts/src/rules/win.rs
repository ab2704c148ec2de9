//! Win detection.

use super::WINNING_LINES;
use crate::types::{Board, Mark};
use strum::IntoEnumIterator;
use tracing::instrument;

/// True iff some winning line is entirely owned by `mark`.
#[instrument(skip(board))]
pub fn check_win(board: &Board, mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&index| board.owned_by(index, mark)))
}

/// Returns the mark owning a complete line, if any.
///
/// Under alternating single-cell placement at most one mark can satisfy
/// [`check_win`] at a time, so the first match is the only match.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    Mark::iter().find(|&mark| check_win(board, mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn occupied(mark: Mark) -> Cell {
        Cell::Occupied(mark)
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!check_win(&board, Mark::X));
        assert!(!check_win(&board, Mark::O));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = occupied(Mark::X);
        cells[1] = occupied(Mark::X);
        cells[2] = occupied(Mark::X);
        let board = Board::from_cells(cells);

        assert!(check_win(&board, Mark::X));
        assert!(!check_win(&board, Mark::O));
        assert_eq!(winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_column_and_diagonal() {
        let mut cells = [Cell::Empty; 9];
        for index in [1, 4, 7] {
            cells[index] = occupied(Mark::O);
        }
        assert_eq!(winner(&Board::from_cells(cells)), Some(Mark::O));

        let mut cells = [Cell::Empty; 9];
        for index in [2, 4, 6] {
            cells[index] = occupied(Mark::X);
        }
        assert_eq!(winner(&Board::from_cells(cells)), Some(Mark::X));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = occupied(Mark::X);
        cells[1] = occupied(Mark::X);
        let board = Board::from_cells(cells);
        assert!(!check_win(&board, Mark::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = occupied(Mark::X);
        cells[1] = occupied(Mark::O);
        cells[2] = occupied(Mark::X);
        let board = Board::from_cells(cells);
        assert_eq!(winner(&board), None);
    }
}
