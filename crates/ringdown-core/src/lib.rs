//! # Ringdown Core Library
//!
//! Core business logic for ringdown, a fixed-duration countdown timer with a
//! circular progress ring. The library is UI-free; the terminal frontend in
//! `ringdown-tui` is a thin rendering layer over this crate.
//!
//! ## Architecture
//!
//! - **Countdown Engine**: a caller-ticked state machine. It owns no thread
//!   and schedules nothing -- the frontend arms a 1-second tick task while
//!   the countdown runs and calls [`tick()`](CountdownEngine::tick) on each
//!   fire.
//! - **Events**: every accepted intent and every completed tick produces an
//!   [`Event`] the frontend can observe and log.
//! - **Config**: TOML-based appearance configuration at
//!   `~/.config/ringdown/config.toml`. The countdown duration itself is a
//!   compile-time constant and is not configurable.
//!
//! ## Key Components
//!
//! - [`CountdownEngine`]: the Idle/Running/Finished state machine
//! - [`Config`]: appearance configuration management
//! - [`Event`]: state-change notifications

pub mod config;
pub mod error;
pub mod events;
pub mod timer;

pub use config::{Config, UiConfig};
pub use error::{ConfigError, CoreError, Result};
pub use events::Event;
pub use timer::{CountdownEngine, Phase, DEFAULT_TOTAL_SECS};
