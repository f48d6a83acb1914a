//! Leaderboard entries and the ranked, bounded list that holds them.
//!
//! ## Ordering
//!
//! Entries are kept descending by score. Sorting is stable, so among equal
//! scores the entry recorded first stays ahead.
//!
//! ## Bound
//!
//! At most `MAX_LEADERBOARD_ENTRIES` entries survive; anything ranked below
//! the cut is dropped on insert.

use std::num::NonZeroU32;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::Score;
use crate::rules::earns_entry;

/// Number of entries a leaderboard keeps.
pub const MAX_LEADERBOARD_ENTRIES: usize = 10;

/// Date format stored in entries.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One completed, positively scored run.
///
/// The score is `NonZeroU32`, so persisted data with a zero or negative score
/// fails to parse instead of entering the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    name: String,
    score: NonZeroU32,
    date: String,
}

impl LeaderboardEntry {
    /// Create an entry dated `date`.
    pub fn new(name: impl Into<String>, score: NonZeroU32, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            score,
            date: date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Create an entry from a session score.
    ///
    /// Returns `None` for scores that do not earn a place (zero or below)
    /// and for scores above `u32::MAX`.
    #[must_use]
    pub fn from_score(name: impl Into<String>, score: Score, date: NaiveDate) -> Option<Self> {
        if !earns_entry(score) {
            return None;
        }
        let score = u32::try_from(score).ok().and_then(NonZeroU32::new)?;
        Some(Self::new(name, score, date))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score.get()
    }

    /// Calendar date the run finished, `YYYY-MM-DD`.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }
}

/// Ranked list of entries, best first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LeaderboardEntry>", into = "Vec<LeaderboardEntry>")]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary entries: sorted descending by score (stable),
    /// then cut to `MAX_LEADERBOARD_ENTRIES`.
    #[must_use]
    pub fn from_entries(mut entries: Vec<LeaderboardEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_LEADERBOARD_ENTRIES);
        Self { entries }
    }

    /// A new leaderboard with `entry` merged in. `self` is unchanged.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use xoring_glow::leaderboard::{Leaderboard, LeaderboardEntry};
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    /// let board = [50, 200, 10].into_iter().fold(Leaderboard::new(), |board, score| {
    ///     board.with_entry(LeaderboardEntry::from_score("ana", score, day).unwrap())
    /// });
    /// let scores: Vec<u32> = board.iter().map(|e| e.score()).collect();
    /// assert_eq!(scores, [200, 50, 10]);
    /// ```
    #[must_use]
    pub fn with_entry(&self, entry: LeaderboardEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self::from_entries(entries)
    }

    /// Zero-based position a new entry with `score` would take, or `None`
    /// if it would fall below the cut.
    #[must_use]
    pub fn placement(&self, score: u32) -> Option<usize> {
        // New entries go after existing ones with an equal score.
        let position = self.entries.iter().filter(|e| e.score() >= score).count();
        (position < MAX_LEADERBOARD_ENTRIES).then_some(position)
    }

    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &LeaderboardEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<LeaderboardEntry>> for Leaderboard {
    fn from(entries: Vec<LeaderboardEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<Leaderboard> for Vec<LeaderboardEntry> {
    fn from(board: Leaderboard) -> Self {
        board.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn entry(name: &str, score: Score) -> LeaderboardEntry {
        LeaderboardEntry::from_score(name, score, day()).unwrap()
    }

    fn scores(board: &Leaderboard) -> Vec<u32> {
        board.iter().map(LeaderboardEntry::score).collect()
    }

    #[test]
    fn test_entry_fields() {
        let e = entry("mira", 42);
        assert_eq!(e.name(), "mira");
        assert_eq!(e.score(), 42);
        assert_eq!(e.date(), "2024-03-09");
    }

    #[test]
    fn test_from_score_rejects_non_positive() {
        assert!(LeaderboardEntry::from_score("x", 0, day()).is_none());
        assert!(LeaderboardEntry::from_score("x", -5, day()).is_none());
        assert!(LeaderboardEntry::from_score("x", i64::from(u32::MAX) + 1, day()).is_none());
    }

    #[test]
    fn test_ordering() {
        let board = Leaderboard::new()
            .with_entry(entry("a", 50))
            .with_entry(entry("b", 200))
            .with_entry(entry("c", 10));
        assert_eq!(scores(&board), vec![200, 50, 10]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let board = Leaderboard::new()
            .with_entry(entry("first", 20))
            .with_entry(entry("second", 20))
            .with_entry(entry("top", 30));
        let names: Vec<&str> = board.iter().map(LeaderboardEntry::name).collect();
        assert_eq!(names, vec!["top", "first", "second"]);
    }

    #[test]
    fn test_capped_at_ten() {
        let board = (1..=11).fold(Leaderboard::new(), |b, s| b.with_entry(entry("p", s * 10)));
        assert_eq!(board.len(), MAX_LEADERBOARD_ENTRIES);
        assert_eq!(scores(&board), vec![110, 100, 90, 80, 70, 60, 50, 40, 30, 20]);
    }

    #[test]
    fn test_with_entry_does_not_mutate() {
        let board = Leaderboard::new().with_entry(entry("a", 5));
        let _ = board.with_entry(entry("b", 6));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_placement() {
        let board = Leaderboard::new().with_entry(entry("a", 50)).with_entry(entry("b", 20));
        assert_eq!(board.placement(60), Some(0));
        assert_eq!(board.placement(50), Some(1));
        assert_eq!(board.placement(1), Some(2));

        let full = (1..=10).fold(Leaderboard::new(), |b, s| b.with_entry(entry("p", s * 10)));
        assert_eq!(full.placement(5), None);
        assert_eq!(full.placement(10), None);
        assert_eq!(full.placement(11), Some(9));
    }

    #[test]
    fn test_json_format() {
        let board = Leaderboard::new().with_entry(entry("ana", 7));
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"[{"name":"ana","score":7,"date":"2024-03-09"}]"#);
    }

    #[test]
    fn test_json_normalises_on_read() {
        let json = r#"[{"name":"a","score":1,"date":"d"},{"name":"b","score":9,"date":"d"}]"#;
        let board: Leaderboard = serde_json::from_str(json).unwrap();
        assert_eq!(scores(&board), vec![9, 1]);
    }

    #[test]
    fn test_json_rejects_zero_score() {
        let json = r#"[{"name":"a","score":0,"date":"d"}]"#;
        assert!(serde_json::from_str::<Leaderboard>(json).is_err());
    }
}
