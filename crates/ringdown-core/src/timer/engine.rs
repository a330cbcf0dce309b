//! Countdown engine implementation.
//!
//! The engine is a caller-ticked state machine. It does not use internal
//! threads or timers - the frontend arms a 1-second tick task while the
//! countdown runs and calls `tick()` on each fire.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Finished -> Idle
//! ```
//!
//! `start` is accepted only in Idle, the restart intent (`reset`) only in
//! Finished. Intents arriving in any other phase are ignored: the frontend
//! never offers the corresponding control there, so there are no error
//! states.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = CountdownEngine::default();
//! engine.start();
//! // Once per second while running:
//! engine.tick(); // Returns Some(Event::Finished) when the countdown ends
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Countdown duration in seconds. Fixed for the session; deliberately not
/// configurable.
pub const DEFAULT_TOTAL_SECS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Running,
    /// Terminal phase: the countdown reached zero and the tick process has
    /// stopped. Only the restart intent leaves this phase.
    Finished,
}

/// Core countdown engine.
///
/// Operates on whole-second ticks -- no internal thread. The caller is
/// responsible for ticking once per second while the phase is `Running`,
/// with the first tick one full period after `start()`.
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    total_secs: u32,
    /// Remaining whole seconds. Always within `[0, total_secs]`; `Finished`
    /// is carried by `phase`, not by a sentinel value.
    remaining_secs: u32,
    phase: Phase,
}

impl CountdownEngine {
    /// Create a new engine counting down from `total_secs`.
    ///
    /// Starts in `Idle` with the full duration remaining.
    pub fn new(total_secs: u32) -> Self {
        Self {
            total_secs,
            remaining_secs: total_secs,
            phase: Phase::Idle,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    /// Fraction of the ring to draw, `0.0 ..= 1.0`.
    ///
    /// While idle or running this is `remaining / total` (the ring empties
    /// as time elapses); once finished the ring is drawn full in the alert
    /// color.
    pub fn ring_progress(&self) -> f64 {
        match self.phase {
            Phase::Finished => 1.0,
            _ if self.total_secs == 0 => 1.0,
            _ => f64::from(self.remaining_secs) / f64::from(self.total_secs),
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs,
            ring_progress: self.ring_progress(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// The start intent. Accepted only in `Idle`.
    ///
    /// The caller must arm the tick process on `Some`; the first decrement
    /// happens one full period after this call, not immediately.
    pub fn start(&mut self) -> Option<Event> {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Running;
                Some(Event::Started {
                    total_secs: self.total_secs,
                    at: Utc::now(),
                })
            }
            Phase::Running | Phase::Finished => None,
        }
    }

    /// Advance the countdown by one second. Accepted only while `Running`.
    ///
    /// The tick that exhausts the final second transitions to `Finished` in
    /// the same step -- there is no resting state at zero. Returns
    /// `Some(Event::Finished)` on that tick; the caller must stop the tick
    /// process. Once finished, further ticks are no-ops, so a stale fire
    /// from an already-cancelled tick process cannot corrupt the state.
    pub fn tick(&mut self) -> Option<Event> {
        match self.phase {
            Phase::Running => {
                self.remaining_secs = self.remaining_secs.saturating_sub(1);
                if self.remaining_secs == 0 {
                    self.phase = Phase::Finished;
                    Some(Event::Finished {
                        total_secs: self.total_secs,
                        at: Utc::now(),
                    })
                } else {
                    Some(Event::Ticked {
                        remaining_secs: self.remaining_secs,
                        at: Utc::now(),
                    })
                }
            }
            Phase::Idle | Phase::Finished => None,
        }
    }

    /// The restart intent. Accepted only in `Finished`.
    ///
    /// Returns the engine to exactly its initial state: `Idle` with the
    /// full duration remaining.
    pub fn reset(&mut self) -> Option<Event> {
        match self.phase {
            Phase::Finished => {
                self.phase = Phase::Idle;
                self.remaining_secs = self.total_secs;
                Some(Event::Reset { at: Utc::now() })
            }
            Phase::Idle | Phase::Running => None,
        }
    }
}

impl Default for CountdownEngine {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_full_duration() {
        let engine = CountdownEngine::default();
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.remaining_secs(), DEFAULT_TOTAL_SECS);
    }

    #[test]
    fn start_enters_running_without_decrementing() {
        let mut engine = CountdownEngine::default();
        assert!(engine.start().is_some());
        assert_eq!(engine.phase(), Phase::Running);
        assert_eq!(engine.remaining_secs(), DEFAULT_TOTAL_SECS);
    }

    #[test]
    fn start_is_ignored_unless_idle() {
        let mut engine = CountdownEngine::default();
        engine.start();
        assert!(engine.start().is_none());
        run_to_finish(&mut engine);
        assert!(engine.start().is_none());
        assert_eq!(engine.phase(), Phase::Finished);
    }

    #[test]
    fn tick_counts_down_by_one() {
        let mut engine = CountdownEngine::default();
        engine.start();
        match engine.tick() {
            Some(Event::Ticked { remaining_secs, .. }) => assert_eq!(remaining_secs, 9),
            other => panic!("expected Ticked, got {other:?}"),
        }
        assert_eq!(engine.phase(), Phase::Running);
        assert_eq!(engine.remaining_secs(), 9);
    }

    #[test]
    fn final_tick_finishes_in_the_same_step() {
        let mut engine = CountdownEngine::new(1);
        engine.start();
        match engine.tick() {
            Some(Event::Finished { .. }) => {}
            other => panic!("expected Finished, got {other:?}"),
        }
        // Never a resting state at a visible zero.
        assert_eq!(engine.phase(), Phase::Finished);
    }

    #[test]
    fn finished_is_idempotent_under_further_ticks() {
        let mut engine = CountdownEngine::default();
        engine.start();
        run_to_finish(&mut engine);
        for _ in 0..5 {
            assert!(engine.tick().is_none());
        }
        assert_eq!(engine.phase(), Phase::Finished);
    }

    #[test]
    fn tick_is_ignored_while_idle() {
        let mut engine = CountdownEngine::default();
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_secs(), DEFAULT_TOTAL_SECS);
    }

    #[test]
    fn restart_only_from_finished() {
        let mut engine = CountdownEngine::default();
        assert!(engine.reset().is_none());
        engine.start();
        assert!(engine.reset().is_none());
        run_to_finish(&mut engine);
        assert!(engine.reset().is_some());
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.remaining_secs(), DEFAULT_TOTAL_SECS);
    }

    #[test]
    fn ten_second_scenario() {
        let mut engine = CountdownEngine::default();
        engine.start();
        engine.tick();
        assert_eq!(engine.remaining_secs(), 9);
        for _ in 0..9 {
            engine.tick();
        }
        assert_eq!(engine.phase(), Phase::Finished);
        // Restart returns to the exact initial state.
        engine.reset();
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.remaining_secs(), 10);
    }

    #[test]
    fn snapshot_returns_valid_event() {
        let engine = CountdownEngine::default();
        match engine.snapshot() {
            Event::StateSnapshot {
                phase,
                remaining_secs,
                total_secs,
                ..
            } => {
                assert_eq!(phase, Phase::Idle);
                assert_eq!(remaining_secs, 10);
                assert_eq!(total_secs, 10);
            }
            other => panic!("expected StateSnapshot, got {other:?}"),
        }
    }

    #[test]
    fn ring_progress_empties_then_fills_on_finish() {
        let mut engine = CountdownEngine::default();
        assert!((engine.ring_progress() - 1.0).abs() < f64::EPSILON);
        engine.start();
        engine.tick();
        assert!((engine.ring_progress() - 0.9).abs() < 1e-9);
        run_to_finish(&mut engine);
        assert!((engine.ring_progress() - 1.0).abs() < f64::EPSILON);
    }

    fn run_to_finish(engine: &mut CountdownEngine) {
        engine.start();
        while engine.phase() == Phase::Running {
            engine.tick();
        }
    }
}
