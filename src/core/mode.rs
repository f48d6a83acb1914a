//! Game modes and their fixed configuration table.
//!
//! Each mode pins the grid dimensions and the starting score. The table is
//! part of the engine's contract: a new mode must add a row to `MODE_TABLE`
//! and a variant to `GameMode`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Score type. Signed because a session may keep playing past zero.
pub type Score = i64;

/// Difficulty mode chosen at session start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Easy,
    Normal,
    Hard,
    Pro,
}

/// Dimensions and starting score bound to a mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeSpec {
    pub rows: usize,
    pub cols: usize,
    pub initial_score: Score,
}

const MODE_TABLE: [(GameMode, ModeSpec); 4] = [
    (GameMode::Easy, ModeSpec { rows: 8, cols: 5, initial_score: 30 }),
    (GameMode::Normal, ModeSpec { rows: 10, cols: 5, initial_score: 60 }),
    (GameMode::Hard, ModeSpec { rows: 8, cols: 10, initial_score: 130 }),
    (GameMode::Pro, ModeSpec { rows: 10, cols: 15, initial_score: 200 }),
];

impl GameMode {
    /// All modes, easiest first.
    pub const ALL: [GameMode; 4] =
        [GameMode::Easy, GameMode::Normal, GameMode::Hard, GameMode::Pro];

    /// Look up this mode's row in the configuration table.
    #[must_use]
    pub fn spec(self) -> ModeSpec {
        // Every variant has exactly one row, in declaration order.
        MODE_TABLE[self as usize].1
    }

    /// Lowercase identifier used in persisted data and by front ends.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameMode::Easy => "easy",
            GameMode::Normal => "normal",
            GameMode::Hard => "hard",
            GameMode::Pro => "pro",
        }
    }

    /// Human-readable label including the grid size, e.g. `Hard (8x10)`.
    #[must_use]
    pub fn label(self) -> String {
        let spec = self.spec();
        let title = match self {
            GameMode::Easy => "Easy",
            GameMode::Normal => "Normal",
            GameMode::Hard => "Hard",
            GameMode::Pro => "Pro",
        };
        format!("{} ({}x{})", title, spec.rows, spec.cols)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a mode name is not in the table.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown game mode `{0}` (expected one of: easy, normal, hard, pro)")]
pub struct ParseModeError(pub String);

impl FromStr for GameMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameMode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_table() {
        assert_eq!(GameMode::Easy.spec(), ModeSpec { rows: 8, cols: 5, initial_score: 30 });
        assert_eq!(GameMode::Normal.spec(), ModeSpec { rows: 10, cols: 5, initial_score: 60 });
        assert_eq!(GameMode::Hard.spec(), ModeSpec { rows: 8, cols: 10, initial_score: 130 });
        assert_eq!(GameMode::Pro.spec(), ModeSpec { rows: 10, cols: 15, initial_score: 200 });
    }

    #[test]
    fn test_table_order_matches_variants() {
        for (i, (mode, _)) in MODE_TABLE.iter().enumerate() {
            assert_eq!(*mode as usize, i);
            assert_eq!(GameMode::ALL[i], *mode);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("hard".parse::<GameMode>(), Ok(GameMode::Hard));
        assert_eq!("pro".parse::<GameMode>(), Ok(GameMode::Pro));

        // No silent fallback to a default mode
        let err = "classic".parse::<GameMode>().unwrap_err();
        assert_eq!(err, ParseModeError("classic".to_string()));
        assert!("Hard".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_display_and_label() {
        assert_eq!(GameMode::Normal.to_string(), "normal");
        assert_eq!(GameMode::Hard.label(), "Hard (8x10)");
        assert_eq!(GameMode::Pro.label(), "Pro (10x15)");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&GameMode::Easy).unwrap();
        assert_eq!(json, "\"easy\"");
        let mode: GameMode = serde_json::from_str("\"pro\"").unwrap();
        assert_eq!(mode, GameMode::Pro);
        assert!(serde_json::from_str::<GameMode>("\"extended\"").is_err());
    }
}
