//! Vertical and horizontal flips.

use crate::Grid;

/// Reverse the order of rows (vertical flip).
///
/// `output[i] == input[R - 1 - i]`; each row's contents are unchanged.
pub fn reverse_row<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    let cells = grid
        .iter_rows()
        .rev()
        .flat_map(|row| row.iter().cloned())
        .collect();
    Grid::from_parts(grid.rows(), grid.cols(), cells)
}

/// Reverse the cells within each row (horizontal flip).
///
/// `output[i][j] == input[i][C - 1 - j]`; row order is unchanged.
pub fn reverse_column<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    let cells = grid
        .iter_rows()
        .flat_map(|row| row.iter().rev().cloned())
        .collect();
    Grid::from_parts(grid.rows(), grid.cols(), cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_row_square() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(reverse_row(&grid).to_rows(), vec![vec![3, 4], vec![1, 2]]);
    }

    #[test]
    fn test_reverse_column_square() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(reverse_column(&grid).to_rows(), vec![vec![2, 1], vec![4, 3]]);
    }

    #[test]
    fn test_reverse_row_non_square() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let result = reverse_row(&grid);
        assert_eq!(result.shape(), (2, 3));
        assert_eq!(result.to_rows(), vec![vec![4, 5, 6], vec![1, 2, 3]]);
    }

    #[test]
    fn test_reverse_column_non_square() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let result = reverse_column(&grid);
        assert_eq!(result.shape(), (2, 3));
        assert_eq!(result.to_rows(), vec![vec![3, 2, 1], vec![6, 5, 4]]);
    }

    #[test]
    fn test_single_row_and_column() {
        let row = Grid::from_rows(vec![vec![1, 2, 3]]).unwrap();
        assert_eq!(reverse_row(&row), row);
        assert_eq!(reverse_column(&row).cells(), &[3, 2, 1]);

        let col = Grid::from_rows(vec![vec![1], vec![2], vec![3]]).unwrap();
        assert_eq!(reverse_column(&col), col);
        assert_eq!(reverse_row(&col).cells(), &[3, 2, 1]);
    }
}
