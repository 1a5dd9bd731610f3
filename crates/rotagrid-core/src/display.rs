//! Text rendering of grids.

use std::fmt;
use std::io::{self, Write};

use crate::Grid;

/// Rows on separate lines, cells separated by single spaces, no trailing newline.
impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.iter_rows().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

/// Write a grid to `out`, one line per row.
pub fn print_matrix<T: fmt::Display, W: Write>(grid: &Grid<T>, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", grid)
}
