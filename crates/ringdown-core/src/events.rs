use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Phase;

/// Every accepted intent and every completed tick produces an Event.
/// The frontend logs them; tests assert on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Countdown left Idle and began running.
    Started {
        total_secs: u32,
        at: DateTime<Utc>,
    },
    /// One second elapsed while running.
    Ticked {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// The countdown reached zero and entered the terminal phase.
    Finished {
        total_secs: u32,
        at: DateTime<Utc>,
    },
    /// Restart intent accepted; state is back to the initial Idle state.
    Reset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        remaining_secs: u32,
        total_secs: u32,
        ring_progress: f64,
        at: DateTime<Utc>,
    },
}
