//! Draw detection.

use super::win::winner;
use crate::types::Board;
use tracing::instrument;

/// True when every cell is occupied.
///
/// Callers deciding a game outcome must test the win condition first: a
/// full board that contains a complete line is a win, not a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// True when the board is full and neither mark owns a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
