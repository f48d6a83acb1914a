//! Scoring: a mode-dependent starting score, minus one per move.

use crate::core::{GameMode, Score};

/// Starting score for `mode`.
#[must_use]
pub fn initial_score(mode: GameMode) -> Score {
    mode.spec().initial_score
}

/// Charge one move. There is no floor; a score can go negative.
#[must_use]
pub fn decrement(score: Score) -> Score {
    score - 1
}

/// Whether a win at `score` earns a leaderboard entry.
#[must_use]
pub fn earns_entry(score: Score) -> bool {
    score > 0
}
