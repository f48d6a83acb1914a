//! Session value types: the in-progress game, move outcomes, errors.

use thiserror::Error;

use crate::core::{GameMode, Score};
use crate::grid::{Grid, GridError};

/// Lifecycle status of a started session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Playing,
    /// Terminal: no further moves are accepted.
    Solved,
}

/// Controller-level state, including the no-session case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Playing,
    Solved,
}

/// One player's attempt at one grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    pub(super) mode: GameMode,
    pub(super) grid: Grid,
    pub(super) score: Score,
    pub(super) player_name: String,
    pub(super) status: SessionStatus,
    pub(super) moves: u32,
    pub(super) seed: Option<u64>,
}

impl GameSession {
    pub(super) fn new(
        mode: GameMode,
        grid: Grid,
        score: Score,
        player_name: String,
        seed: Option<u64>,
    ) -> Self {
        Self {
            mode,
            grid,
            score,
            player_name,
            status: SessionStatus::Playing,
            moves: 0,
            seed,
        }
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current score; negative once more moves were made than the mode allows.
    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Accepted moves so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Seed the grid was generated from; `None` for caller-provided grids.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Result of an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Grid still has lit cells.
    Playing { score: Score },
    /// Grid cleared. `rank` is the zero-based leaderboard position, `None`
    /// when the score earned no place.
    Solved { score: Score, rank: Option<usize> },
}

impl MoveOutcome {
    #[must_use]
    pub fn score(&self) -> Score {
        match *self {
            MoveOutcome::Playing { score } | MoveOutcome::Solved { score, .. } => score,
        }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, MoveOutcome::Solved { .. })
    }
}

/// Rejected session operations. A rejected call leaves the controller
/// unchanged.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SessionError {
    #[error("player name must not be empty")]
    EmptyPlayerName,
    #[error("a session is already in progress; reset first")]
    SessionInProgress,
    #[error("no session in progress")]
    NoSession,
    #[error("session is already solved")]
    AlreadySolved,
    #[error("{mode} mode needs a {rows}x{cols} grid, got {found_rows}x{found_cols}")]
    GridMismatch {
        mode: GameMode,
        rows: usize,
        cols: usize,
        found_rows: usize,
        found_cols: usize,
    },
    #[error(transparent)]
    Grid(#[from] GridError),
}
