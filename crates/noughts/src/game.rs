//! Game state manager: turn order, termination, scoring, and resets.

use crate::mode::GameMode;
use crate::rules;
use crate::score::ScoreBoard;
use crate::types::{Board, Cell, Mark};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Outcome state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are being accepted.
    InProgress,
    /// A mark completed a line; no further moves accepted until reset.
    Won(Mark),
    /// The board filled with no line; no further moves accepted until reset.
    Draw,
}

/// Reasons a placement is rejected. All recoverable; callers ignore the
/// move or surface a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Cell index outside the 0-8 range.
    #[display("cell index is out of the 0-8 range")]
    OutOfBounds,
    /// Target cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
    /// The game has finished; reset to continue.
    #[display("game is not active")]
    GameOver,
    /// The mark given is not the one to move.
    #[display("it is not that mark's turn")]
    OutOfTurn,
}

/// Owns the board, turn order, mode, and score tally for one session.
///
/// Constructed once per session; finished games are re-entered through
/// [`Game::reset`], which keeps the tally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    mode: GameMode,
    scores: ScoreBoard,
    generation: u64,
}

impl Game {
    /// Creates a session with an empty board, `X` to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_mode(GameMode::default())
    }

    /// Creates a session starting in `mode`.
    #[instrument]
    pub fn with_mode(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            status: GameStatus::InProgress,
            mode,
            scores: ScoreBoard::new(),
            generation: 0,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark to move. Meaningful only while the game is active; after a
    /// terminal move it stays on the mark that ended the game.
    pub fn current_player(&self) -> Mark {
        self.to_move
    }

    /// The game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True while moves are being accepted.
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// The current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The session score tally.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Monotonic counter bumped by every [`Game::reset`]. Collaborators
    /// deferring work capture it at scheduling time and discard the work if
    /// it no longer matches when the deferral fires.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Places `mark` at `index`.
    ///
    /// On success the cell is set, termination is evaluated for the mark
    /// just placed (win before draw), and only if the game stays active does
    /// the turn pass to the other mark.
    ///
    /// # Errors
    ///
    /// [`PlaceError`] when the game is finished, the index is out of range,
    /// the cell is occupied, or `mark` is not the one to move. The board is
    /// left unchanged in every error case.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, index: usize, mark: Mark) -> Result<(), PlaceError> {
        if self.status != GameStatus::InProgress {
            return Err(PlaceError::GameOver);
        }
        if index >= Board::SIZE {
            return Err(PlaceError::OutOfBounds);
        }
        if !self.board.is_empty(index) {
            return Err(PlaceError::Occupied);
        }
        if mark != self.to_move {
            warn!(%mark, to_move = %self.to_move, "Rejected out-of-turn placement");
            return Err(PlaceError::OutOfTurn);
        }

        self.board.set(index, Cell::Occupied(mark));

        // Win is evaluated for the mark just placed, before any turn switch.
        if rules::check_win(&self.board, mark) {
            info!(%mark, index, "Game won");
            self.status = GameStatus::Won(mark);
            self.scores.record_win(mark);
        } else if rules::is_full(&self.board) {
            info!(index, "Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.to_move = mark.opponent();
        }

        Ok(())
    }

    /// True iff `mark` owns a complete line on the current board.
    pub fn check_win(&self, mark: Mark) -> bool {
        rules::check_win(&self.board, mark)
    }

    /// True iff every cell is occupied. Test [`Game::check_win`] first when
    /// deciding an outcome.
    pub fn check_draw(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Clears the board and re-enters play with `X` to move.
    ///
    /// The score tally is kept. The generation counter is bumped so that
    /// deferred work scheduled against the previous game is discarded.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(generation = self.generation + 1, "Resetting game");
        self.board = Board::new();
        self.to_move = Mark::X;
        self.status = GameStatus::InProgress;
        self.generation += 1;
    }

    /// Switches to `mode`, discarding any game in progress via [`Game::reset`].
    #[instrument(skip(self))]
    pub fn switch_mode(&mut self, mode: GameMode) {
        info!(%mode, "Switching game mode");
        self.mode = mode;
        self.reset();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
