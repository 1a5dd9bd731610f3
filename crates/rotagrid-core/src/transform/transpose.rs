//! Row/column axis swap.

use crate::Grid;

/// Swap rows and columns.
///
/// An `R x C` grid becomes `C x R`, with `output[i][j] == input[j][i]`.
pub fn transpose<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    let (rows, cols) = grid.shape();
    let src = grid.cells();

    let mut cells = Vec::with_capacity(src.len());
    for col in 0..cols {
        for row in 0..rows {
            cells.push(src[row * cols + col].clone());
        }
    }

    Grid::from_parts(cols, rows, cells)
}
