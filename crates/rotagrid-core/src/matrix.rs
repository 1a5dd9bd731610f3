//! Sequential demonstration grids.

use std::mem;

use serde::{Deserialize, Serialize};

use crate::{Grid, GridError};

/// Side length of a square demonstration grid.
///
/// Built from a signed request: the sign is ignored and zero selects
/// [`MatrixSize::DEFAULT`], so every integer maps to a usable size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64")]
pub struct MatrixSize(usize);

impl MatrixSize {
    /// Size used when none (or zero) is requested.
    pub const DEFAULT: MatrixSize = MatrixSize(4);

    /// Normalize a signed size request: absolute value, zero maps to the default.
    pub fn from_signed(row_size: i64) -> Self {
        let n = usize::try_from(row_size.unsigned_abs()).unwrap_or(usize::MAX);
        Self::new(n)
    }

    /// Create a size, mapping zero to the default.
    pub fn new(n: usize) -> Self {
        if n == 0 {
            Self::DEFAULT
        } else {
            MatrixSize(n)
        }
    }

    /// The side length, always at least 1.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for MatrixSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i64> for MatrixSize {
    fn from(row_size: i64) -> Self {
        Self::from_signed(row_size)
    }
}

/// Build an `n x n` grid filled row-major with `1, 2, 3, ...`.
///
/// The cell at row `y`, column `x` holds `1 + x + y * n`.
///
/// Fails with [`GridError::TooLarge`] when `n * n` cells cannot be
/// allocated.
pub fn try_make_square(size: MatrixSize) -> Result<Grid<i64>, GridError> {
    let n = size.get();
    let too_large = GridError::TooLarge { rows: n, cols: n };

    let len = n
        .checked_mul(n)
        .filter(|&len| len <= isize::MAX as usize / mem::size_of::<i64>())
        .ok_or_else(|| too_large.clone())?;

    let mut cells = Vec::new();
    cells.try_reserve_exact(len).map_err(|_| too_large)?;
    for y in 0..n {
        for x in 0..n {
            cells.push((1 + x + y * n) as i64);
        }
    }
    Ok(Grid::from_parts(n, n, cells))
}

/// Build an `n x n` grid filled row-major with `1, 2, 3, ...`.
///
/// # Panics
///
/// Panics when the grid cannot be allocated; use [`try_make_square`] to get
/// a [`GridError::TooLarge`] instead.
pub fn make_square(size: MatrixSize) -> Grid<i64> {
    match try_make_square(size) {
        Ok(grid) => grid,
        Err(err) => panic!("{}", err),
    }
}

/// Build a square grid of sequential integers from a signed size request.
///
/// `make_matrix(-n)` equals `make_matrix(n)`, and `make_matrix(0)` equals
/// `make_matrix(4)`.
///
/// # Panics
///
/// Panics for sizes whose `n * n` cells cannot be allocated (for example
/// `i64::MIN`); see [`try_make_square`].
pub fn make_matrix(row_size: i64) -> Grid<i64> {
    make_square(MatrixSize::from_signed(row_size))
}
