mod engine;

pub use engine::{CountdownEngine, Phase, DEFAULT_TOTAL_SECS};
