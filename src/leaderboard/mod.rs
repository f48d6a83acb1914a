//! Ranked, bounded, persisted record of winning runs.
//!
//! - `entry`: entries and the in-memory `Leaderboard`
//! - `storage`: the `KeyValueStore` capability and its backends
//! - `store`: `LeaderboardStore`, which loads and records over a backend

pub mod entry;
pub mod storage;
pub mod store;

pub use entry::{Leaderboard, LeaderboardEntry, DATE_FORMAT, MAX_LEADERBOARD_ENTRIES};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::LeaderboardStore;
