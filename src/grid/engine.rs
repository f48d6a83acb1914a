//! Grid generation and the toggle transition.
//!
//! `toggle` is the only way the puzzle state changes. It inverts a cell and
//! its orthogonal neighbours, so it is its own inverse and presses commute.

use im::Vector;
use smallvec::SmallVec;

use super::board::{Grid, GridError};
use crate::core::GameRng;

/// Default probability that a generated cell starts lit.
pub const DEFAULT_DENSITY: f64 = 0.5;

/// Cells inverted by a press: the center plus up to four neighbours.
pub type Footprint = SmallVec<[(usize, usize); 5]>;

/// Generate a grid where each cell is independently lit with probability
/// `density`.
///
/// ```
/// use xoring_glow::core::GameRng;
/// use xoring_glow::grid::{generate, DEFAULT_DENSITY};
///
/// let a = generate(8, 5, DEFAULT_DENSITY, &mut GameRng::new(1)).unwrap();
/// let b = generate(8, 5, DEFAULT_DENSITY, &mut GameRng::new(1)).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn generate(
    rows: usize,
    cols: usize,
    density: f64,
    rng: &mut GameRng,
) -> Result<Grid, GridError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(GridError::InvalidDensity(density));
    }

    let cells: Vector<bool> = (0..rows * cols).map(|_| rng.gen_bool(density)).collect();
    let grid = Grid::from_cells(rows, cols, cells);
    tracing::debug!(rows, cols, density, lit = grid.lit_count(), "generated grid");
    Ok(grid)
}

/// Cells affected by pressing `(row, col)` on a `rows`×`cols` grid.
///
/// Neighbours that fall outside the grid are left out. The center itself is
/// not bounds-checked here.
#[must_use]
pub fn footprint(rows: usize, cols: usize, row: usize, col: usize) -> Footprint {
    let mut cells = Footprint::new();
    cells.push((row, col));
    if let Some(up) = row.checked_sub(1) {
        cells.push((up, col));
    }
    if row + 1 < rows {
        cells.push((row + 1, col));
    }
    if let Some(left) = col.checked_sub(1) {
        cells.push((row, left));
    }
    if col + 1 < cols {
        cells.push((row, col + 1));
    }
    cells
}

/// Press `(row, col)`: return a new grid with the cell and its in-bounds
/// orthogonal neighbours inverted. The input grid is untouched.
pub fn toggle(grid: &Grid, row: usize, col: usize) -> Result<Grid, GridError> {
    let (rows, cols) = grid.dims();
    if !grid.contains(row, col) {
        return Err(GridError::OutOfBounds { row, col, rows, cols });
    }

    let mut next = grid.clone();
    for (r, c) in footprint(rows, cols, row, col) {
        next.flip(r, c);
    }
    Ok(next)
}
