//! Engine configuration.
//!
//! Callers configure the engine at startup with an `EngineConfig`. Every
//! field has a default, so a partial JSON document is enough:
//!
//! ```
//! use xoring_glow::core::EngineConfig;
//!
//! let config = EngineConfig::from_json(r#"{ "seed": 7 }"#).unwrap();
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.density, 0.5);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key the leaderboard is persisted under.
pub const DEFAULT_LEADERBOARD_KEY: &str = "xoringGlowLeaderboard";

/// Errors from loading or validating an `EngineConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("density must be within [0, 1], got {0}")]
    InvalidDensity(f64),
    #[error("leaderboard key must not be empty")]
    EmptyLeaderboardKey,
    #[error("max_generation_attempts must be at least 1")]
    NoGenerationAttempts,
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Probability that a generated cell starts lit.
    pub density: f64,

    /// Random seed for grid generation.
    /// `None` draws a fresh seed from the OS.
    pub seed: Option<u64>,

    /// Key the leaderboard is stored under.
    pub leaderboard_key: String,

    /// Only hand out grids that the solver can clear.
    pub require_solvable: bool,

    /// Upper bound on regeneration when `require_solvable` is set.
    /// The last attempt is used even if unsolvable.
    pub max_generation_attempts: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            density: 0.5,
            seed: None,
            leaderboard_key: DEFAULT_LEADERBOARD_KEY.to_string(),
            require_solvable: false,
            max_generation_attempts: 64,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the cell density.
    #[must_use]
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the leaderboard storage key.
    #[must_use]
    pub fn with_leaderboard_key(mut self, key: impl Into<String>) -> Self {
        self.leaderboard_key = key.into();
        self
    }

    /// Regenerate grids until the solver finds a solution.
    #[must_use]
    pub fn with_require_solvable(mut self, attempts: u32) -> Self {
        self.require_solvable = true;
        self.max_generation_attempts = attempts;
        self
    }

    /// Check field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::InvalidDensity(self.density));
        }
        if self.leaderboard_key.is_empty() {
            return Err(ConfigError::EmptyLeaderboardKey);
        }
        if self.max_generation_attempts == 0 {
            return Err(ConfigError::NoGenerationAttempts);
        }
        Ok(())
    }
}
