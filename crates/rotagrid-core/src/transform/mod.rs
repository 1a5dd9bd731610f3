//! Grid transforms: transpose, flips and quarter-turn rotations.
//!
//! Every transform borrows its input and returns a freshly allocated grid, so
//! the original can be reused after any call.
//!
//! # Composition
//!
//! The rotations are built from the three primitives:
//! - `rotate_90  = reverse_row(transpose(m))`
//! - `rotate_180 = reverse_row(reverse_column(m))`
//! - `rotate_270 = reverse_column(transpose(m))`
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = counter-clockwise
//! - Row 0 is the top of the grid, column 0 its left edge

mod flip;
mod rotation;
mod transpose;

pub use flip::{reverse_column, reverse_row};
pub use rotation::{
    apply_rotation, rotate_180, rotate_270, rotate_90, rotate_by_degrees, rotated_shape, Rotation,
};
pub use transpose::transpose;
