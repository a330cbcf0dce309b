//! Application state holder.
//!
//! Owns the countdown engine and the tick task. All engine mutation happens
//! here, on the main loop task; the tick task only sends messages. At most
//! one tick task is alive at any time: it is armed on entering Running and
//! aborted the moment the engine reports Finished, so a restart cycle can
//! never end up with two tickers decrementing the same countdown.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, info};

use ringdown_core::{CountdownEngine, Event, Phase};

/// Period of the tick task. The first fire comes one full period after
/// start -- the countdown never decrements at the instant it begins.
const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct App {
    engine: CountdownEngine,
    tick_tx: mpsc::UnboundedSender<()>,
    tick_rx: mpsc::UnboundedReceiver<()>,
    ticker: Option<JoinHandle<()>>,
    should_quit: bool,
}

impl App {
    pub fn new(engine: CountdownEngine) -> Self {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        Self {
            engine,
            tick_tx,
            tick_rx,
            ticker: None,
            should_quit: false,
        }
    }

    pub fn engine(&self) -> &CountdownEngine {
        &self.engine
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.disarm_ticker();
        self.should_quit = true;
    }

    // ── Intents ──────────────────────────────────────────────────────

    /// The primary control: start from Idle, restart from Finished.
    /// Running has no controls.
    pub fn on_primary(&mut self) {
        match self.engine.phase() {
            Phase::Idle => self.on_start(),
            Phase::Finished => self.on_restart(),
            Phase::Running => {}
        }
    }

    fn on_start(&mut self) {
        if let Some(Event::Started { total_secs, .. }) = self.engine.start() {
            info!(total_secs, "countdown started");
            self.arm_ticker();
        }
    }

    /// The restart intent; ignored by the engine unless Finished. The tick
    /// task is already dead by the time Finished is reachable.
    pub fn on_restart(&mut self) {
        if self.engine.reset().is_some() {
            info!("countdown reset");
        }
    }

    // ── Tick process ─────────────────────────────────────────────────

    /// Apply all tick messages that have arrived since the last frame.
    pub fn drain_ticks(&mut self) {
        while self.tick_rx.try_recv().is_ok() {
            match self.engine.tick() {
                Some(Event::Finished { .. }) => {
                    info!("countdown finished");
                    self.disarm_ticker();
                }
                Some(Event::Ticked { remaining_secs, .. }) => {
                    debug!(remaining_secs, "tick");
                }
                _ => {}
            }
        }
    }

    fn arm_ticker(&mut self) {
        self.disarm_ticker();
        // Drop fires left over from a previous run.
        while self.tick_rx.try_recv().is_ok() {}

        let tx = self.tick_tx.clone();
        // Anchor the first fire to the start intent, not to the task's
        // first poll.
        let first_fire = Instant::now() + TICK_PERIOD;
        self.ticker = Some(tokio::spawn(async move {
            let mut interval = time::interval_at(first_fire, TICK_PERIOD);
            loop {
                interval.tick().await;
                if tx.send(()).is_err() {
                    break;
                }
            }
        }));
    }

    fn disarm_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }

    #[cfg(test)]
    fn ticker_is_armed(&self) -> bool {
        self.ticker.is_some()
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.disarm_ticker();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn advance_secs(app: &mut App, secs: u64) {
        for _ in 0..secs {
            // Let the tick task register its timer before advancing.
            tokio::task::yield_now().await;
            time::advance(TICK_PERIOD).await;
            tokio::task::yield_now().await;
            app.drain_ticks();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_drives_the_countdown_and_stops_at_finish() {
        let mut app = App::new(CountdownEngine::default());
        app.on_primary();
        assert!(app.ticker_is_armed());
        assert_eq!(app.engine().remaining_secs(), 10);

        advance_secs(&mut app, 1).await;
        assert_eq!(app.engine().remaining_secs(), 9);

        advance_secs(&mut app, 9).await;
        assert_eq!(app.engine().phase(), Phase::Finished);
        assert!(!app.ticker_is_armed());

        // No residual fires as time keeps advancing.
        advance_secs(&mut app, 30).await;
        assert_eq!(app.engine().phase(), Phase::Finished);
    }

    #[tokio::test(start_paused = true)]
    async fn primary_is_inert_while_running() {
        let mut app = App::new(CountdownEngine::default());
        app.on_primary();
        advance_secs(&mut app, 3).await;
        app.on_primary();
        assert_eq!(app.engine().phase(), Phase::Running);
        assert_eq!(app.engine().remaining_secs(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_cycle_arms_a_single_fresh_ticker() {
        let mut app = App::new(CountdownEngine::default());
        app.on_primary();
        advance_secs(&mut app, 10).await;
        assert_eq!(app.engine().phase(), Phase::Finished);

        app.on_primary(); // restart -> back to Idle, no ticker
        assert_eq!(app.engine().phase(), Phase::Idle);
        assert_eq!(app.engine().remaining_secs(), 10);
        assert!(!app.ticker_is_armed());

        app.on_primary(); // start again
        assert!(app.ticker_is_armed());
        advance_secs(&mut app, 1).await;
        // Exactly one ticker: one second elapsed means exactly one decrement.
        assert_eq!(app.engine().remaining_secs(), 9);
    }

    #[tokio::test(start_paused = true)]
    async fn quit_disarms_the_ticker() {
        let mut app = App::new(CountdownEngine::default());
        app.on_primary();
        app.request_quit();
        assert!(app.should_quit());
        assert!(!app.ticker_is_armed());
    }
}
