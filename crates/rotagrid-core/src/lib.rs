//! Rotagrid Core - Grid rotation library
//!
//! This crate provides a validated rectangular [`Grid`] type and pure
//! transforms over it: transpose, row and column reversal, and 90°, 180° and
//! 270° counter-clockwise rotations composed from them.
//!
//! No operation mutates its input; each returns a new grid.

pub mod display;
pub mod grid;
pub mod matrix;
pub mod transform;

pub use display::print_matrix;
pub use grid::{Grid, GridError};
pub use matrix::{make_matrix, make_square, try_make_square, MatrixSize};
pub use transform::{
    apply_rotation, reverse_column, reverse_row, rotate_180, rotate_270, rotate_90,
    rotate_by_degrees, rotated_shape, transpose, Rotation,
};
