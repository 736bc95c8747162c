//! Terminal presentation layer.
//!
//! Reads one key at a time, hands it to [`App`], and redraws. All game
//! rules live in `noughts_core`.

mod app;
mod input;
mod ui;

pub use app::{App, status_text};
pub use input::{digit_cell, move_cursor};

use crate::Config;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

/// Restores the terminal when dropped, on every exit path.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            error!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
            error!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Runs the interactive client until the user quits.
#[instrument(skip_all)]
pub fn run(config: &Config) -> Result<()> {
    info!("Starting terminal client");

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to create terminal")?;
    terminal.clear()?;

    let mut app = App::new(*config.show_hints());
    let result = event_loop(&mut terminal, &mut app);

    terminal.show_cursor()?;
    if let Err(e) = &result {
        error!(error = ?e, "Game loop error");
    }
    info!(moves = app.game().move_count(), "Terminal client stopped");
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}
