//! Session score tally.

use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Win counts per mark for the current session.
///
/// Survives game resets; nothing is persisted beyond the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    x_wins: u32,
    o_wins: u32,
}

impl ScoreBoard {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Win count for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Credits a win to `mark`. Called once per detected win, never for draws.
    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x_wins += 1,
            Mark::O => self.o_wins += 1,
        }
        info!(%mark, wins = self.wins(mark), "Recorded win");
    }
}
