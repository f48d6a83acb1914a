//! The puzzle grid.
//!
//! Cells are stored row-major in an `im::Vector<bool>`, so cloning a grid is
//! O(1) and a toggle only copies the chunks it touches. Dimensions never
//! change after construction.

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by grid construction and the toggle transition.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds { row: usize, col: usize, rows: usize, cols: usize },
    #[error("density must be within [0, 1], got {0}")]
    InvalidDensity(f64),
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
}

/// A rows×cols matrix of lit/unlit cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vector<bool>,
}

impl Grid {
    /// Create a grid with every cell unlit.
    #[must_use]
    pub fn unlit(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: std::iter::repeat(false).take(rows * cols).collect(),
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// ```
    /// use xoring_glow::grid::Grid;
    ///
    /// let grid = Grid::from_rows(vec![vec![true, false], vec![false, false]]).unwrap();
    /// assert_eq!(grid.get(0, 0), Some(true));
    /// assert_eq!(grid.lit_count(), 1);
    /// ```
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vector::new();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged { row: i, expected: cols, found: row.len() });
            }
            cells.extend(row.iter().copied());
        }
        Ok(Self { rows: rows.len(), cols, cells })
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vector<bool>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether `(row, col)` names a cell of this grid.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Cell state, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if self.contains(row, col) {
            self.cells.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// Number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    /// Iterate cells row-major.
    pub fn cells(&self) -> impl Iterator<Item = bool> + '_ {
        self.cells.iter().copied()
    }

    /// Copy out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows)
            .map(|r| (0..self.cols).map(|c| self.cells[r * self.cols + c]).collect())
            .collect()
    }

    /// Invert one in-bounds cell. Callers check bounds.
    pub(crate) fn flip(&mut self, row: usize, col: usize) {
        let index = row * self.cols + col;
        let lit = self.cells[index];
        self.cells.set(index, !lit);
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<bool>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

/// `#` for lit, `.` for unlit, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.cols {
                let ch = if self.cells[r * self.cols + c] { '#' } else { '.' };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
