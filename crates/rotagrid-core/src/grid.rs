//! The rectangular grid type and its construction errors.
//!
//! A [`Grid`] stores its cells in a single row-major buffer alongside explicit
//! row and column counts. Every constructor validates the shape, so code that
//! holds a `Grid` can rely on it being non-empty and rectangular.

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Errors that can occur when building or rotating a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The grid has no rows, or its rows have no cells.
    #[error("Grid must have at least one row and one column")]
    Empty,

    /// A row's length differs from the length of the first row.
    #[error("Jagged grid: row {row} has {actual} cells, expected {expected}")]
    JaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A flat cell buffer does not hold `rows * cols` cells.
    #[error("Invalid cell data: expected {rows}x{cols} = {} cells, got {actual}", .rows * .cols)]
    CellCountMismatch {
        rows: usize,
        cols: usize,
        actual: usize,
    },

    /// A rotation angle that is not a whole number of quarter turns.
    #[error("Invalid rotation angle: {0} degrees is not a multiple of 90")]
    InvalidAngle(i32),

    /// A requested grid whose cell buffer cannot be allocated.
    #[error("Grid too large: {rows}x{cols} cells cannot be allocated")]
    TooLarge { rows: usize, cols: usize },
}

/// A non-empty rectangular grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Vec<Vec<T>>")]
pub struct Grid<T = i64> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from nested rows.
    ///
    /// Fails with [`GridError::Empty`] when there are no rows or the first row
    /// is empty, and with [`GridError::JaggedRow`] for the first row whose
    /// length differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            log::debug!("rejecting empty grid ({} rows)", rows.len());
            return Err(GridError::Empty);
        }

        if let Some((row, actual)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            log::debug!("rejecting jagged grid at row {}", row);
            return Err(GridError::JaggedRow {
                row,
                expected: cols,
                actual,
            });
        }

        let row_count = rows.len();
        let cells: Vec<T> = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Build a grid from a row-major cell buffer.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        if rows.checked_mul(cols) != Some(cells.len()) {
            return Err(GridError::CellCountMismatch {
                rows,
                cols,
                actual: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid whose shape is already known to be valid.
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<T>) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        debug_assert_eq!(rows * cols, cells.len());
        Self { rows, cols, cells }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (cells per row).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the grid has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    /// Cells of row `index`, or `None` when out of bounds.
    pub fn row(&self, index: usize) -> Option<&[T]> {
        if index >= self.rows {
            return None;
        }
        let start = index * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Iterate over rows from top to bottom.
    pub fn iter_rows(&self) -> std::slice::Chunks<'_, T> {
        self.cells.chunks(self.cols)
    }

    /// The row-major cell buffer.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Consume the grid, returning its row-major cell buffer.
    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }
}

impl<T: Clone> Grid<T> {
    /// Copy the grid out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Grid<T> {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl<T> From<Grid<T>> for Vec<Vec<T>> {
    fn from(grid: Grid<T>) -> Self {
        let cols = grid.cols;
        let mut rows = Vec::with_capacity(grid.rows);
        let mut cells = grid.cells.into_iter();
        for _ in 0..grid.rows {
            rows.push(cells.by_ref().take(cols).collect());
        }
        rows
    }
}

// Serialized as nested rows so the wire form matches what `from_rows` accepts.
impl<T: Serialize> Serialize for Grid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_rows())
    }
}
