//! Key handling: maps terminal events to timer intents.
//!
//! Keys that do not correspond to a control offered in the current phase
//! fall through to the engine, which ignores them.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::app::App;

/// Poll for terminal events and forward intents to the state holder.
/// Returns true if the app should quit.
pub fn handle_events(app: &mut App) -> Result<bool> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // Only handle key press events (not release) - important for Windows.
            if key.kind != KeyEventKind::Press {
                return Ok(app.should_quit());
            }

            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.request_quit();
                return Ok(true);
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
                KeyCode::Char(' ') | KeyCode::Enter => app.on_primary(),
                KeyCode::Char('r') => app.on_restart(),
                _ => {}
            }
        }
    }

    Ok(app.should_quit())
}
