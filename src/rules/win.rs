//! Win detection.

use crate::grid::Grid;

/// True iff every cell is unlit.
///
/// A grid with no rows or no columns is vacuously solved. Mode dimensions
/// never produce one, but the predicate stays total.
#[must_use]
pub fn is_solved(grid: &Grid) -> bool {
    grid.cells().all(|lit| !lit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameMode;
    use crate::grid::toggle;

    #[test]
    fn test_unlit_grids_are_solved() {
        for mode in GameMode::ALL {
            let spec = mode.spec();
            assert!(is_solved(&Grid::unlit(spec.rows, spec.cols)), "{mode}");
        }
    }

    #[test]
    fn test_single_lit_cell_is_not_solved() {
        let grid = Grid::from_rows(vec![vec![false, false], vec![false, true]]).unwrap();
        assert!(!is_solved(&grid));
    }

    #[test]
    fn test_degenerate_grids() {
        assert!(is_solved(&Grid::unlit(0, 5)));
        assert!(is_solved(&Grid::unlit(5, 0)));
    }

    #[test]
    fn test_toggle_example() {
        let start = Grid::unlit(2, 2);
        let pressed = toggle(&start, 0, 0).unwrap();
        assert!(!is_solved(&pressed));
        assert!(is_solved(&toggle(&pressed, 0, 0).unwrap()));
    }
}
