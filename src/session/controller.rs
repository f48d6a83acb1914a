//! Session lifecycle.
//!
//! ```text
//! Idle --start--> Playing --apply_move (grid cleared)--> Solved
//!   ^                |                                      |
//!   +-----reset------+--------------reset-------------------+
//! ```
//!
//! The controller owns the only `GameSession`, the RNG that seeds new grids
//! and the in-memory copy of the leaderboard. The leaderboard is loaded once
//! at construction and written at most once per solved session.

use tracing::{debug, info, warn};

use super::clock::{DateSource, SystemDate};
use super::state::{ControllerState, GameSession, MoveOutcome, SessionError, SessionStatus};
use crate::core::{ConfigError, EngineConfig, GameMode, GameRng, Score};
use crate::grid::{generate, toggle, Grid, Solver};
use crate::leaderboard::{KeyValueStore, Leaderboard, LeaderboardEntry, LeaderboardStore};
use crate::rules::{decrement, earns_entry, initial_score, is_solved};

/// Drives one game session at a time.
pub struct SessionController<S, D = SystemDate> {
    config: EngineConfig,
    rng: GameRng,
    store: LeaderboardStore<S>,
    leaderboard: Leaderboard,
    dates: D,
    session: Option<GameSession>,
}

impl<S: KeyValueStore> SessionController<S, SystemDate> {
    /// Create a controller dating entries with the system clock.
    pub fn new(config: EngineConfig, storage: S) -> Result<Self, ConfigError> {
        Self::with_dates(config, storage, SystemDate)
    }
}

impl<S: KeyValueStore, D: DateSource> SessionController<S, D> {
    /// Create a controller with an explicit date source.
    ///
    /// Validates `config` and loads the persisted leaderboard.
    pub fn with_dates(config: EngineConfig, storage: S, dates: D) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let store = LeaderboardStore::new(storage, config.leaderboard_key.clone());
        let leaderboard = store.load();
        info!(seed = rng.seed(), entries = leaderboard.len(), "session controller ready");

        Ok(Self {
            config,
            rng,
            store,
            leaderboard,
            dates,
            session: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        match self.session.as_ref().map(GameSession::status) {
            None => ControllerState::Idle,
            Some(SessionStatus::Playing) => ControllerState::Playing,
            Some(SessionStatus::Solved) => ControllerState::Solved,
        }
    }

    /// The current session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    #[must_use]
    pub fn leaderboard_store(&self) -> &LeaderboardStore<S> {
        &self.store
    }

    /// Tear down the controller and return its storage backend.
    pub fn into_storage(self) -> S {
        self.store.into_storage()
    }

    /// Start a session on a freshly generated grid.
    pub fn start(
        &mut self,
        mode: GameMode,
        player_name: &str,
    ) -> Result<&GameSession, SessionError> {
        let name = self.check_can_start(player_name)?;
        let mut rng = self.rng.fork();
        let grid = self.generate_grid(mode, &mut rng)?;
        Ok(self.begin(mode, name, grid, Some(rng.seed())))
    }

    /// Start a session on a caller-provided grid.
    ///
    /// The grid must have the mode's dimensions.
    pub fn start_with_grid(
        &mut self,
        mode: GameMode,
        player_name: &str,
        grid: Grid,
    ) -> Result<&GameSession, SessionError> {
        let name = self.check_can_start(player_name)?;
        let spec = mode.spec();
        if grid.dims() != (spec.rows, spec.cols) {
            return Err(SessionError::GridMismatch {
                mode,
                rows: spec.rows,
                cols: spec.cols,
                found_rows: grid.rows(),
                found_cols: grid.cols(),
            });
        }
        Ok(self.begin(mode, name, grid, None))
    }

    /// Press `(row, col)`.
    ///
    /// Costs one point whether or not the press brings the grid closer to
    /// clear. Rejected calls leave the session untouched.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, SessionError> {
        let session = self.session.as_mut().ok_or(SessionError::NoSession)?;
        if session.status == SessionStatus::Solved {
            return Err(SessionError::AlreadySolved);
        }

        session.grid = toggle(&session.grid, row, col)?;
        session.score = decrement(session.score);
        session.moves += 1;
        let score = session.score;

        if !is_solved(&session.grid) {
            debug!(row, col, score, lit = session.grid.lit_count(), "move applied");
            return Ok(MoveOutcome::Playing { score });
        }

        session.status = SessionStatus::Solved;
        let name = session.player_name.clone();
        info!(player = %name, mode = %session.mode, score, moves = session.moves, "grid solved");

        let rank = self.record_win(&name, score);
        Ok(MoveOutcome::Solved { score, rank })
    }

    /// Suggest a press that is part of a solution to the current grid.
    ///
    /// `None` when not playing or when the grid cannot be cleared.
    #[must_use]
    pub fn hint(&self) -> Option<(usize, usize)> {
        let session = self.session.as_ref().filter(|s| s.status == SessionStatus::Playing)?;
        Solver::new().hint(&session.grid)
    }

    /// Drop any session and return to idle.
    pub fn reset(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(player = %session.player_name, status = ?session.status, "session reset");
        }
    }

    fn check_can_start(&self, player_name: &str) -> Result<String, SessionError> {
        let name = player_name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyPlayerName);
        }
        if self.session.is_some() {
            return Err(SessionError::SessionInProgress);
        }
        Ok(name.to_string())
    }

    fn begin(
        &mut self,
        mode: GameMode,
        player_name: String,
        grid: Grid,
        seed: Option<u64>,
    ) -> &GameSession {
        let score = initial_score(mode);
        info!(player = %player_name, %mode, score, lit = grid.lit_count(), "session started");
        self.session.insert(GameSession::new(mode, grid, score, player_name, seed))
    }

    /// Generate a grid for `mode`. With `require_solvable`, retry until the
    /// grid is unsolved and clearable, or attempts run out.
    fn generate_grid(&self, mode: GameMode, rng: &mut GameRng) -> Result<Grid, SessionError> {
        let spec = mode.spec();
        let solver = Solver::new();
        let mut attempt = 1;
        loop {
            let grid = generate(spec.rows, spec.cols, self.config.density, rng)?;
            if !self.config.require_solvable {
                return Ok(grid);
            }

            let playable = !is_solved(&grid) && solver.is_solvable(&grid);
            if playable || attempt >= self.config.max_generation_attempts {
                if playable {
                    debug!(%mode, attempt, "generated solvable grid");
                } else {
                    warn!(%mode, attempt, "no solvable grid found; using last attempt");
                }
                return Ok(grid);
            }
            attempt += 1;
        }
    }

    /// Record a win. Returns the leaderboard rank, if the score earned one.
    fn record_win(&mut self, name: &str, score: Score) -> Option<usize> {
        if !earns_entry(score) {
            info!(player = %name, score, "solved without reward");
            return None;
        }
        let Some(entry) = LeaderboardEntry::from_score(name, score, self.dates.today()) else {
            warn!(player = %name, score, "score out of leaderboard range; not recorded");
            return None;
        };

        let rank = self.leaderboard.placement(entry.score());
        match self.store.record(&self.leaderboard, entry.clone()) {
            Ok(updated) => self.leaderboard = updated,
            Err(err) => {
                warn!(%err, "failed to persist leaderboard; keeping result in memory");
                self.leaderboard = self.leaderboard.with_entry(entry);
            }
        }
        rank
    }
}
