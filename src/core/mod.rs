//! Core engine types: game modes, configuration, RNG.
//!
//! Everything else in the crate builds on these. Modes are a fixed table;
//! configuration and randomness are supplied by the caller.

pub mod mode;
pub mod config;
pub mod rng;

pub use mode::{GameMode, ModeSpec, ParseModeError, Score};
pub use config::{ConfigError, EngineConfig, DEFAULT_LEADERBOARD_KEY};
pub use rng::{GameRng, GameRngState};
