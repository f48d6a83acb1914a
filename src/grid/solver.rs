//! Lights-Out solver over GF(2).
//!
//! Pressing a cell twice is the same as not pressing it, and presses commute,
//! so a solution is a set of cells. With one unknown per cell and one
//! equation per cell ("the presses covering this cell flip it an odd number of
//! times iff it is lit"), Gaussian elimination either finds a press set or
//! proves the grid unsolvable.
//!
//! Rows are packed into `u64` words; the largest mode (10x15) is a 150x151
//! system, which eliminates in well under a millisecond.

use super::board::Grid;
use super::engine::footprint;

/// Stateless solver.
#[derive(Clone, Copy, Debug, Default)]
pub struct Solver;

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Find a set of presses that clears `grid`, in row-major order.
    ///
    /// Returns `None` if no press set exists. Free variables are left
    /// unpressed, so the result is a solution but not necessarily the
    /// shortest one.
    #[must_use]
    pub fn solve(&self, grid: &Grid) -> Option<Vec<(usize, usize)>> {
        let (rows, cols) = grid.dims();
        let n = rows * cols;
        if n == 0 {
            return Some(Vec::new());
        }

        let mut system = build_system(grid);
        let mut pivots = Vec::with_capacity(n);

        for col in 0..n {
            let rank = pivots.len();
            let Some(found) = (rank..n).find(|&r| bit(&system[r], col)) else {
                continue;
            };
            system.swap(rank, found);

            let pivot = system[rank].clone();
            for (r, row) in system.iter_mut().enumerate() {
                if r != rank && bit(row, col) {
                    for (word, p) in row.iter_mut().zip(&pivot) {
                        *word ^= p;
                    }
                }
            }
            pivots.push(col);
        }

        // A zero row with a set right-hand side is a contradiction.
        if system[pivots.len()..].iter().any(|row| bit(row, n)) {
            return None;
        }

        let mut presses: Vec<(usize, usize)> = pivots
            .iter()
            .enumerate()
            .filter(|&(r, _)| bit(&system[r], n))
            .map(|(_, &var)| (var / cols, var % cols))
            .collect();
        presses.sort_unstable();
        Some(presses)
    }

    /// Whether any press set clears `grid`.
    #[must_use]
    pub fn is_solvable(&self, grid: &Grid) -> bool {
        self.solve(grid).is_some()
    }

    /// A single press that is part of some solution.
    ///
    /// `None` if the grid is already clear or cannot be cleared.
    #[must_use]
    pub fn hint(&self, grid: &Grid) -> Option<(usize, usize)> {
        self.solve(grid)?.first().copied()
    }
}

/// One row per cell: the presses that flip it, plus its lit state in the
/// augmented column `n`.
fn build_system(grid: &Grid) -> Vec<Vec<u64>> {
    let (rows, cols) = grid.dims();
    let n = rows * cols;
    let words = (n + 1).div_ceil(64);

    grid.cells()
        .enumerate()
        .map(|(i, lit)| {
            let mut row = vec![0u64; words];
            // The neighbour relation is symmetric, so the presses covering
            // cell i are exactly the footprint of pressing i.
            for (r, c) in footprint(rows, cols, i / cols, i % cols) {
                set_bit(&mut row, r * cols + c);
            }
            if lit {
                set_bit(&mut row, n);
            }
            row
        })
        .collect()
}

fn bit(row: &[u64], index: usize) -> bool {
    (row[index / 64] >> (index % 64)) & 1 == 1
}

fn set_bit(row: &mut [u64], index: usize) {
    row[index / 64] |= 1 << (index % 64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use crate::grid::{generate, toggle};
    use crate::rules::is_solved;

    fn apply(grid: &Grid, presses: &[(usize, usize)]) -> Grid {
        presses.iter().fold(grid.clone(), |g, &(r, c)| toggle(&g, r, c).unwrap())
    }

    #[test]
    fn test_solve_single_press() {
        let grid = toggle(&Grid::unlit(3, 3), 1, 1).unwrap();
        let presses = Solver::new().solve(&grid).unwrap();
        assert!(is_solved(&apply(&grid, &presses)));
    }

    #[test]
    fn test_solve_clear_grid_needs_no_presses() {
        assert_eq!(Solver::new().solve(&Grid::unlit(8, 5)), Some(Vec::new()));
        assert_eq!(Solver::new().hint(&Grid::unlit(8, 5)), None);
    }

    #[test]
    fn test_unsolvable() {
        // Any press on a 1x2 grid flips both cells, so one lit cell is stuck.
        let grid = Grid::from_rows(vec![vec![true, false]]).unwrap();
        assert_eq!(Solver::new().solve(&grid), None);
        assert!(!Solver::new().is_solvable(&grid));
        assert_eq!(Solver::new().hint(&grid), None);
    }

    #[test]
    fn test_scrambled_grids_are_solved() {
        // A grid reached by presses from clear is always solvable.
        let mut rng = GameRng::new(11);
        for (rows, cols) in [(8, 5), (10, 5), (8, 10), (10, 15)] {
            let presses = generate(rows, cols, 0.3, &mut rng).unwrap();
            let scramble: Vec<_> = (0..rows)
                .flat_map(|r| (0..cols).map(move |c| (r, c)))
                .filter(|&(r, c)| presses.get(r, c) == Some(true))
                .collect();
            let grid = apply(&Grid::unlit(rows, cols), &scramble);

            let solution = Solver::new().solve(&grid).unwrap();
            assert!(is_solved(&apply(&grid, &solution)), "{rows}x{cols} not cleared");
        }
    }

    #[test]
    fn test_mode_solvability() {
        // 8x5 has a one-dimensional null space: about half of random grids
        // cannot be cleared. 8x10 is full rank, so every grid can.
        let mut rng = GameRng::new(3);
        let unsolvable_easy = (0..32)
            .map(|_| generate(8, 5, 0.5, &mut rng).unwrap())
            .filter(|g| !Solver::new().is_solvable(g))
            .count();
        assert!(unsolvable_easy > 0);

        for _ in 0..16 {
            let grid = generate(8, 10, 0.5, &mut rng).unwrap();
            let solution = Solver::new().solve(&grid).unwrap();
            assert!(is_solved(&apply(&grid, &solution)));
        }
    }

    #[test]
    fn test_hint_is_part_of_solution() {
        let grid = apply(&Grid::unlit(8, 10), &[(0, 0), (3, 4), (7, 9)]);
        let hint = Solver::new().hint(&grid).unwrap();
        assert!(grid.contains(hint.0, hint.1));
    }

    #[test]
    fn test_empty_grid() {
        assert_eq!(Solver::new().solve(&Grid::unlit(0, 4)), Some(Vec::new()));
    }
}
