//! Terminal UI for noughts.

#![warn(missing_docs)]

mod app;
mod theme;
mod ui;

use anyhow::Result;
use app::App;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts::GameMode;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use theme::Theme;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "noughts_tui", about = "Tic-tac-toe in the terminal")]
struct Args {
    /// Who controls the O mark.
    #[arg(long, value_enum, default_value = "two-player")]
    mode: ModeArg,
    /// Seed for the advisor's tie-breaking; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Pacing delay in milliseconds before the advisor's reply.
    #[arg(long, default_value_t = 500)]
    advisor_delay_ms: u64,
    /// Start with the dark palette.
    #[arg(long)]
    dark: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Two humans at one keyboard.
    TwoPlayer,
    /// Human as X against the advisor.
    Advisor,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::TwoPlayer => GameMode::TwoPlayer,
            ModeArg::Advisor => GameMode::VsAdvisor,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // The alternate screen owns stdout; logs go to a file when requested.
    if std::env::var_os("RUST_LOG").is_some() {
        let log = std::fs::File::create("noughts-tui.log")?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::sync::Mutex::new(log))
            .with_ansi(false)
            .init();
    }

    info!("Starting noughts TUI");

    let app = App::new(
        args.mode.into(),
        args.seed,
        Duration::from_millis(args.advisor_delay_ms),
        if args.dark { Theme::Dark } else { Theme::Light },
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Short poll so a due advisor reply is applied promptly.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code, Instant::now());
                }
            }
        }

        app.tick(Instant::now());
    }
    Ok(())
}
