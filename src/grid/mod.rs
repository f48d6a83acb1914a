//! Puzzle grid: the board type, generation, the toggle transition and a
//! solver.

pub mod board;
pub mod engine;
pub mod solver;

pub use board::{Grid, GridError};
pub use engine::{footprint, generate, toggle, Footprint, DEFAULT_DENSITY};
pub use solver::Solver;
