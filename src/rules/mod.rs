//! Game rules that sit on top of the grid: when a session is won and how
//! it is scored.

pub mod score;
pub mod win;

pub use score::{decrement, earns_entry, initial_score};
pub use win::is_solved;
