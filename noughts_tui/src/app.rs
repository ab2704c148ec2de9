//! Application state and key handling.

use crate::theme::Theme;
use crossterm::event::KeyCode;
use noughts::{Game, GameMode, GameStatus, Mark, choose_move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// The mark the human plays in advisor mode.
const HUMAN_MARK: Mark = Mark::X;
/// The mark the advisor plays in advisor mode.
const ADVISOR_MARK: Mark = Mark::O;

/// An advisor reply scheduled for later, purely for presentation pacing.
///
/// The game state is final before the delay starts; the reply only carries
/// the generation observed at scheduling time so a reset or mode switch in
/// the meantime makes it stale and it is dropped unapplied.
#[derive(Debug, Clone, Copy)]
struct PendingReply {
    due: Instant,
    generation: u64,
}

/// Main application state.
pub struct App {
    game: Game,
    rng: StdRng,
    theme: Theme,
    advisor_delay: Duration,
    pending: Option<PendingReply>,
    status: String,
    should_quit: bool,
}

impl App {
    /// Creates the application.
    pub fn new(mode: GameMode, seed: Option<u64>, advisor_delay: Duration, theme: Theme) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut app = Self {
            game: Game::with_mode(mode),
            rng,
            theme,
            advisor_delay,
            pending: None,
            status: String::new(),
            should_quit: false,
        };
        app.refresh_status();
        app
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The active color theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Routes one key press.
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('m') => self.switch_mode(),
            KeyCode::Char('t') => self.theme = self.theme.toggle(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.select_cell(index, now);
            }
            _ => {}
        }
    }

    /// Applies a due advisor reply. Runs once per event-loop pass.
    pub fn tick(&mut self, now: Instant) {
        let Some(pending) = self.pending else {
            return;
        };
        if pending.generation != self.game.generation() {
            debug!("Dropping stale advisor reply");
            self.pending = None;
            return;
        }
        if now < pending.due {
            return;
        }
        self.pending = None;
        if !self.game.is_active() {
            return;
        }

        match choose_move(self.game.board(), ADVISOR_MARK, HUMAN_MARK, &mut self.rng) {
            Ok(index) => {
                debug!(index, "Applying advisor reply");
                if let Err(e) = self.game.place_mark(index, ADVISOR_MARK) {
                    warn!(index, error = %e, "Advisor reply rejected");
                }
                self.refresh_status();
            }
            // Draw detection runs before the advisor is consulted, so this
            // is a sequencing bug rather than a game outcome.
            Err(e) => warn!(error = %e, "Advisor consulted without a legal move"),
        }
    }

    fn reset(&mut self) {
        self.game.reset();
        self.pending = None;
        self.refresh_status();
    }

    fn switch_mode(&mut self) {
        self.game.switch_mode(self.game.mode().toggle());
        self.pending = None;
        self.refresh_status();
    }

    fn select_cell(&mut self, index: usize, now: Instant) {
        // While a reply is pending the O turn is the advisor's, not the
        // keyboard's.
        if self.game.mode() == GameMode::VsAdvisor
            && self.game.current_player() == ADVISOR_MARK
        {
            debug!(index, "Ignoring selection during the advisor's turn");
            return;
        }

        let mark = self.game.current_player();
        match self.game.place_mark(index, mark) {
            Ok(()) => {
                self.refresh_status();
                self.maybe_schedule_reply(now);
            }
            Err(e) => {
                debug!(index, %mark, error = %e, "Ignored invalid selection");
                self.status = format!("Invalid move: {e}. Try again.");
            }
        }
    }

    fn maybe_schedule_reply(&mut self, now: Instant) {
        if self.game.mode() == GameMode::VsAdvisor
            && self.game.is_active()
            && self.game.current_player() == ADVISOR_MARK
        {
            self.pending = Some(PendingReply {
                due: now + self.advisor_delay,
                generation: self.game.generation(),
            });
        }
    }

    fn refresh_status(&mut self) {
        let vs_advisor = self.game.mode() == GameMode::VsAdvisor;
        self.status = match self.game.status() {
            GameStatus::InProgress => {
                if vs_advisor && self.game.current_player() == ADVISOR_MARK {
                    "Advisor is thinking...".to_string()
                } else {
                    format!("Player {}'s turn", self.game.current_player())
                }
            }
            GameStatus::Won(mark) => {
                if vs_advisor && mark == ADVISOR_MARK {
                    "The advisor wins! Press 'r' to play again.".to_string()
                } else {
                    format!("Player {mark} wins! Press 'r' to play again.")
                }
            }
            GameStatus::Draw => "Game ended in a draw! Press 'r' to play again.".to_string(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    fn advisor_app() -> App {
        App::new(GameMode::VsAdvisor, Some(7), DELAY, Theme::Light)
    }

    #[test]
    fn test_advisor_reply_waits_for_the_pacing_delay() {
        let mut app = advisor_app();
        let t0 = Instant::now();

        app.handle_key(KeyCode::Char('1'), t0);
        assert_eq!(app.game().board().empty_cells().count(), 8);

        app.tick(t0 + DELAY - Duration::from_millis(1));
        assert_eq!(app.game().board().empty_cells().count(), 8, "reply fired early");

        app.tick(t0 + DELAY);
        assert_eq!(app.game().board().empty_cells().count(), 7);
        assert_eq!(app.game().current_player(), HUMAN_MARK);
        // With only X at 0, the advisor's center tier decides.
        assert!(!app.game().board().is_empty(4));
    }

    #[test]
    fn test_keys_ignored_while_reply_is_pending() {
        let mut app = advisor_app();
        let t0 = Instant::now();

        app.handle_key(KeyCode::Char('1'), t0);
        app.handle_key(KeyCode::Char('2'), t0);

        assert_eq!(app.game().board().empty_cells().count(), 8);
        assert_eq!(app.game().current_player(), ADVISOR_MARK);
    }

    #[test]
    fn test_reset_discards_pending_reply() {
        let mut app = advisor_app();
        let t0 = Instant::now();

        app.handle_key(KeyCode::Char('1'), t0);
        app.handle_key(KeyCode::Char('r'), t0);
        app.tick(t0 + DELAY * 2);

        assert_eq!(app.game().board().empty_cells().count(), 9);
        assert_eq!(app.game().current_player(), Mark::X);
    }

    #[test]
    fn test_stale_generation_guards_the_reply() {
        let mut app = advisor_app();
        let t0 = Instant::now();

        app.handle_key(KeyCode::Char('1'), t0);
        // Reset behind the scheduler's back; the pending entry survives but
        // its generation no longer matches.
        app.game.reset();
        app.tick(t0 + DELAY * 2);

        assert_eq!(app.game().board().empty_cells().count(), 9);
        assert!(app.pending.is_none());
    }

    #[test]
    fn test_mode_switch_resets_and_cancels_reply() {
        let mut app = advisor_app();
        let t0 = Instant::now();

        app.handle_key(KeyCode::Char('1'), t0);
        app.handle_key(KeyCode::Char('m'), t0);
        app.tick(t0 + DELAY * 2);

        assert_eq!(app.game().mode(), GameMode::TwoPlayer);
        assert_eq!(app.game().board().empty_cells().count(), 9);
    }

    #[test]
    fn test_theme_toggle_leaves_game_untouched() {
        let mut app = advisor_app();
        let t0 = Instant::now();

        app.handle_key(KeyCode::Char('1'), t0);
        app.handle_key(KeyCode::Char('t'), t0);

        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(app.game().board().empty_cells().count(), 8);
    }

    #[test]
    fn test_two_player_mode_never_schedules_a_reply() {
        let mut app = App::new(GameMode::TwoPlayer, Some(7), DELAY, Theme::Light);
        let t0 = Instant::now();

        app.handle_key(KeyCode::Char('1'), t0);
        assert!(app.pending.is_none());

        app.handle_key(KeyCode::Char('2'), t0);
        app.tick(t0 + DELAY * 2);
        assert_eq!(app.game().board().empty_cells().count(), 7);
        assert_eq!(app.game().current_player(), Mark::X);
    }
}
