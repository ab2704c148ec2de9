//! Noughts - a tic-tac-toe game state engine with a heuristic move advisor.
//!
//! # Architecture
//!
//! - **Game**: owns the board, turn order, mode, and session score tally;
//!   accepts placements and detects termination.
//! - **Rules**: pure win/draw evaluation over a board snapshot.
//! - **Advisor**: fixed-priority heuristic choosing the computer opponent's
//!   next cell, generic over an injected random source.
//!
//! The crate is free of rendering, timing, and event-loop concepts; a
//! presentation shell drives it through [`Game::place_mark`] and friends and
//! reads state back through the accessors.
//!
//! # Example
//!
//! ```
//! use noughts::{Game, Mark, choose_move};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut game = Game::new();
//! game.place_mark(0, Mark::X)?;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let reply = choose_move(game.board(), Mark::O, Mark::X, &mut rng)?;
//! game.place_mark(reply, Mark::O)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod advisor;
mod game;
mod mode;
mod rules;
mod score;
mod types;

pub use advisor::{NoAvailableMove, choose_move};
pub use game::{Game, GameStatus, PlaceError};
pub use mode::GameMode;
pub use rules::{WINNING_LINES, check_win, is_draw, is_full, winner};
pub use score::ScoreBoard;
pub use types::{Board, Cell, Mark};
