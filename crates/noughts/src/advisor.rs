//! Heuristic move advisor for the computer opponent.
//!
//! A greedy, fixed-priority chooser, not an optimal player: it looks one
//! ply ahead and can be beaten by a fork. The priority order and its
//! tie-break policy are part of the observable contract.

use crate::rules::WINNING_LINES;
use crate::types::{Board, Mark};
use derive_more::{Display, Error};
use rand::Rng;
use tracing::{debug, instrument};

/// Returned when the advisor is asked to move on a full board.
///
/// Correct sequencing detects the draw before consulting the advisor, so
/// hitting this is a caller bug, not a game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("no available move: the board is full")]
pub struct NoAvailableMove;

/// Picks a cell for `own` to play, given that `opponent` holds the other mark.
///
/// Priority, first match wins:
///
/// 1. complete a line for `own`;
/// 2. block a line `opponent` is about to complete;
/// 3. the center cell;
/// 4. a uniformly random empty corner;
/// 5. a uniformly random remaining empty cell.
///
/// Ties in the random tiers are broken through `rng`, so a seeded source
/// pins the choice.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    own: Mark,
    opponent: Mark,
    rng: &mut R,
) -> Result<usize, NoAvailableMove> {
    if board.is_full() {
        return Err(NoAvailableMove);
    }

    if let Some(index) = completing_cell(board, own) {
        debug!(index, "Advisor takes the winning cell");
        return Ok(index);
    }

    if let Some(index) = completing_cell(board, opponent) {
        debug!(index, "Advisor blocks the opponent");
        return Ok(index);
    }

    if board.is_empty(Board::CENTER) {
        debug!("Advisor takes the center");
        return Ok(Board::CENTER);
    }

    let corners: Vec<usize> = Board::CORNERS
        .iter()
        .copied()
        .filter(|&index| board.is_empty(index))
        .collect();
    if !corners.is_empty() {
        let index = corners[rng.gen_range(0..corners.len())];
        debug!(index, "Advisor takes a corner");
        return Ok(index);
    }

    let open: Vec<usize> = board.empty_cells().collect();
    let index = open[rng.gen_range(0..open.len())];
    debug!(index, "Advisor falls back to a random cell");
    Ok(index)
}

/// Finds the empty cell that completes a line on which `mark` already holds
/// the other two. Lines are scanned in [`WINNING_LINES`] order; within a
/// line the leading pair is tried before the two rotations.
fn completing_cell(board: &Board, mark: Mark) -> Option<usize> {
    for [a, b, c] in WINNING_LINES {
        if board.owned_by(a, mark) && board.owned_by(b, mark) && board.is_empty(c) {
            return Some(c);
        }
        if board.owned_by(a, mark) && board.owned_by(c, mark) && board.is_empty(b) {
            return Some(b);
        }
        if board.owned_by(b, mark) && board.owned_by(c, mark) && board.is_empty(a) {
            return Some(a);
        }
    }
    None
}
