//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Who controls the `O` mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
pub enum GameMode {
    /// Two humans alternating at the same keyboard.
    #[default]
    TwoPlayer,
    /// A human as `X` against the heuristic advisor as `O`.
    VsAdvisor,
}

impl GameMode {
    /// Returns the display name.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Two Player",
            GameMode::VsAdvisor => "Vs Advisor",
        }
    }

    /// Toggles between the two modes.
    pub fn toggle(self) -> Self {
        match self {
            GameMode::TwoPlayer => GameMode::VsAdvisor,
            GameMode::VsAdvisor => GameMode::TwoPlayer,
        }
    }
}
