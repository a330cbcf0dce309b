use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io::{stdout, Stdout};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ringdown_core::{Config, CountdownEngine};
use ringdown_tui::app::App;
use ringdown_tui::input::handle_events;
use ringdown_tui::theme::Palette;
use ringdown_tui::ui;

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(out);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                let _ = execute!(out, LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let palette = match Config::load() {
        Ok(config) => Palette::from_config(&config.ui),
        Err(err) => {
            tracing::warn!("config unavailable, using defaults: {err}");
            Palette::default()
        }
    };

    let result = {
        let mut session = TerminalSession::new()?;
        let mut app = App::new(CountdownEngine::default());
        run_app(&mut session.terminal, &mut app, &palette).await
    };

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    palette: &Palette,
) -> Result<()> {
    loop {
        // Yield so the tick task can make progress: crossterm's event::poll()
        // is blocking and doesn't yield to the tokio runtime.
        tokio::task::yield_now().await;

        app.drain_ticks();

        terminal.draw(|frame| ui::draw(frame, app.engine(), palette))?;

        if handle_events(app)? {
            return Ok(());
        }
    }
}
