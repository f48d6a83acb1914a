//! Game session lifecycle.
//!
//! `SessionController` composes grid generation, toggling, win detection and
//! scoring into a single session, and records winning runs on the
//! leaderboard.

pub mod clock;
pub mod controller;
pub mod state;

pub use clock::{DateSource, FixedDate, SystemDate};
pub use controller::SessionController;
pub use state::{ControllerState, GameSession, MoveOutcome, SessionError, SessionStatus};
