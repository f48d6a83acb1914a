//! Persisted leaderboard.
//!
//! The board is stored as a JSON array of `{name, score, date}` under one key
//! of a `KeyValueStore`. Loading never fails: missing or malformed data reads
//! as an empty board.

use super::entry::{Leaderboard, LeaderboardEntry};
use super::storage::{KeyValueStore, StorageError};

/// Leaderboard persistence over a key-value backend.
#[derive(Clone, Debug)]
pub struct LeaderboardStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> LeaderboardStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give the backend back, e.g. to reopen it in a new controller.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Read the persisted board.
    ///
    /// Absent data, storage errors and parse errors all yield an empty board;
    /// the latter two are logged.
    #[must_use]
    pub fn load(&self) -> Leaderboard {
        let bytes = match self.storage.get(&self.key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Leaderboard::new(),
            Err(err) => {
                tracing::warn!(key = %self.key, %err, "failed to read leaderboard");
                return Leaderboard::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(board) => board,
            Err(err) => {
                tracing::warn!(key = %self.key, %err, "ignoring malformed leaderboard");
                Leaderboard::new()
            }
        }
    }

    /// Merge `entry` into `leaderboard`, persist the result and return it.
    pub fn record(
        &mut self,
        leaderboard: &Leaderboard,
        entry: LeaderboardEntry,
    ) -> Result<Leaderboard, StorageError> {
        let updated = leaderboard.with_entry(entry);
        self.save(&updated)?;
        Ok(updated)
    }

    /// Persist `leaderboard` as-is.
    pub fn save(&mut self, leaderboard: &Leaderboard) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(leaderboard)?;
        self.storage.set(&self.key, bytes)?;
        tracing::debug!(key = %self.key, entries = leaderboard.len(), "saved leaderboard");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::leaderboard::MemoryStore;

    const KEY: &str = "xoringGlowLeaderboard";

    fn entry(name: &str, score: i64) -> LeaderboardEntry {
        let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        LeaderboardEntry::from_score(name, score, day).unwrap()
    }

    /// Backend whose reads and writes always fail.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
            Err(std::io::Error::other("disk gone").into())
        }

        fn set(&mut self, _key: &str, _value: Vec<u8>) -> Result<(), StorageError> {
            Err(std::io::Error::other("disk gone").into())
        }
    }

    #[test]
    fn test_load_absent_is_empty() {
        let store = LeaderboardStore::new(MemoryStore::new(), KEY);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let malformed: [&[u8]; 4] = [
            b"not json",
            b"{}",
            br#"[{"name":"a"}]"#,
            br#"[{"name":"a","score":-3,"date":"d"}]"#,
        ];
        for bad in malformed {
            let mut storage = MemoryStore::new();
            storage.set(KEY, bad.to_vec()).unwrap();
            let store = LeaderboardStore::new(storage, KEY);
            assert!(store.load().is_empty());
        }
    }

    #[test]
    fn test_load_storage_error_is_empty() {
        let store = LeaderboardStore::new(BrokenStore, KEY);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_record_persists() {
        let mut store = LeaderboardStore::new(MemoryStore::new(), KEY);
        let board = store.record(&Leaderboard::new(), entry("a", 50)).unwrap();
        let board = store.record(&board, entry("b", 200)).unwrap();
        let board = store.record(&board, entry("c", 10)).unwrap();

        let loaded = store.load();
        assert_eq!(loaded, board);
        let scores: Vec<u32> = loaded.iter().map(LeaderboardEntry::score).collect();
        assert_eq!(scores, vec![200, 50, 10]);
    }

    #[test]
    fn test_record_uses_key() {
        let mut store = LeaderboardStore::new(MemoryStore::new(), "custom");
        store.record(&Leaderboard::new(), entry("a", 1)).unwrap();
        assert!(store.storage().get("custom").unwrap().is_some());
        assert!(store.storage().get(KEY).unwrap().is_none());
    }

    #[test]
    fn test_record_write_failure() {
        let mut store = LeaderboardStore::new(BrokenStore, KEY);
        let result = store.record(&Leaderboard::new(), entry("a", 1));
        assert!(matches!(result, Err(StorageError::Io(_))));
    }

    #[test]
    fn test_load_normalises_oversized_board() {
        let entries: Vec<_> = (1..=12).map(|s| entry("p", s)).collect();
        let mut storage = MemoryStore::new();
        storage.set(KEY, serde_json::to_vec(&entries).unwrap()).unwrap();

        let board = LeaderboardStore::new(storage, KEY).load();
        assert_eq!(board.len(), 10);
        assert_eq!(board.entries()[0].score(), 12);
        assert_eq!(board.entries()[9].score(), 3);
    }
}
