//! Line clearing

use tracing::trace;

use crate::grid::Grid;

/// Remove every full row, compacting the rows above it downwards
///
/// Rows are scanned from the bottom up. After a row is removed the same index
/// is examined again, since it now holds the row that used to sit above it.
/// Returns the number of rows removed.
pub fn sweep(grid: &mut Grid) -> usize {
    let mut cleared = 0;
    let mut y = grid.height();

    while y > 0 {
        if grid.is_row_full(y - 1) {
            grid.remove_row(y - 1);
            cleared += 1;
        } else {
            y -= 1;
        }
    }

    if cleared > 0 {
        trace!(cleared, "swept rows");
    }
    cleared
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_nothing_to_clear() {
        let rows = [[0u8, 1, 1], [1, 0, 1], [1, 1, 0]];
        let mut grid = Grid::from_rows(&rows).unwrap();
        let before = grid.clone();
        assert_eq!(sweep(&mut grid), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_sweep_two_bottom_rows() {
        // bottom to top: complete, complete, partial
        let rows = [[0u8, 2, 0], [1, 1, 1], [3, 3, 3]];
        let mut grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(sweep(&mut grid), 2);
        assert_eq!(
            grid.to_rows(),
            vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 2, 0]]
        );
    }

    #[test]
    fn test_sweep_non_adjacent_rows() {
        let rows = [
            [5u8, 0, 0],
            [1, 1, 1],
            [0, 6, 0],
            [2, 2, 2],
            [0, 0, 7],
        ];
        let mut grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(sweep(&mut grid), 2);
        assert_eq!(
            grid.to_rows(),
            vec![
                vec![0, 0, 0],
                vec![0, 0, 0],
                vec![5, 0, 0],
                vec![0, 6, 0],
                vec![0, 0, 7],
            ]
        );
    }

    #[test]
    fn test_sweep_top_row() {
        let rows = [[4u8, 4], [0, 1]];
        let mut grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(sweep(&mut grid), 1);
        assert_eq!(grid.to_rows(), vec![vec![0, 0], vec![0, 1]]);
    }

    #[test]
    fn test_sweep_full_grid() {
        let rows = [[1u8, 1], [2, 2], [3, 3]];
        let mut grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(sweep(&mut grid), 3);
        assert!(grid.cells().iter().all(|&c| c == 0));
    }
}
