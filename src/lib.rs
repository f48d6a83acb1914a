//! # xoring-glow
//!
//! Engine for a single-player toggle-grid puzzle, a Lights-Out variant.
//!
//! Pressing a cell inverts it and its four orthogonal neighbours. The goal is
//! a grid with every cell unlit. Each press costs one point from a starting
//! score fixed by the game mode; a win with points left is recorded on a
//! ten-entry leaderboard.
//!
//! ## Design Principles
//!
//! 1. **Values, not globals**: a `GameSession` is owned by one
//!    `SessionController`; several controllers can run side by side.
//!
//! 2. **Injected effects**: randomness (`GameRng`), storage
//!    (`KeyValueStore`) and dates (`DateSource`) are all supplied by the
//!    caller, so every behaviour is reproducible in tests.
//!
//! 3. **Pure transitions**: `toggle` returns a new grid and never mutates its
//!    input. Grids are persistent vectors, so this is cheap.
//!
//! ## Modules
//!
//! - `core`: game modes, configuration, RNG
//! - `grid`: the grid, generation, toggle, solver
//! - `rules`: win detection and scoring
//! - `leaderboard`: ranked entries and their persistence
//! - `session`: the session state machine
//!
//! ## Example
//!
//! ```
//! use xoring_glow::{EngineConfig, GameMode, MemoryStore, SessionController};
//!
//! let config = EngineConfig::default().with_seed(1);
//! let mut controller = SessionController::new(config, MemoryStore::new()).unwrap();
//! controller.start(GameMode::Hard, "ana").unwrap();
//!
//! let outcome = controller.apply_move(0, 0).unwrap();
//! assert_eq!(outcome.score(), 129);
//! ```

pub mod core;
pub mod grid;
pub mod rules;
pub mod leaderboard;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, EngineConfig, GameMode, GameRng, GameRngState, ModeSpec, ParseModeError, Score,
};

pub use crate::grid::{generate, toggle, Grid, GridError, Solver, DEFAULT_DENSITY};

pub use crate::rules::{decrement, earns_entry, initial_score, is_solved};

pub use crate::leaderboard::{
    FileStore, KeyValueStore, Leaderboard, LeaderboardEntry, LeaderboardStore, MemoryStore,
    StorageError, MAX_LEADERBOARD_ENTRIES,
};

pub use crate::session::{
    ControllerState, DateSource, FixedDate, GameSession, MoveOutcome, SessionController,
    SessionError, SessionStatus, SystemDate,
};
