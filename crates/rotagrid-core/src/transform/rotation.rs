//! Quarter-turn rotations built from transpose and flips.
//!
//! Rotations are counter-clockwise, matching the usual reading of a positive
//! angle. A 90° or 270° rotation swaps the grid's dimensions; 180° keeps them.
//!
//! # Algorithm
//!
//! No index arithmetic beyond the primitives is needed:
//! ```text
//! rotate_90  = reverse_row(transpose(m))      R x C -> C x R
//! rotate_180 = reverse_row(reverse_column(m)) R x C -> R x C
//! rotate_270 = reverse_column(transpose(m))   R x C -> C x R
//! ```

use serde::{Deserialize, Serialize};

use super::flip::{reverse_column, reverse_row};
use super::transpose::transpose;
use crate::{Grid, GridError};

/// A rotation by a whole number of counter-clockwise quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    /// No rotation.
    #[default]
    Rotate0,
    /// 90° counter-clockwise.
    Rotate90,
    /// 180°.
    Rotate180,
    /// 270° counter-clockwise (90° clockwise).
    Rotate270,
}

impl Rotation {
    /// Convert an angle in degrees to a rotation.
    ///
    /// Any multiple of 90 is accepted; angles are normalized modulo 360, so
    /// `-90` (clockwise) maps to [`Rotation::Rotate270`] and `450` to
    /// [`Rotation::Rotate90`].
    pub fn from_degrees(degrees: i32) -> Result<Self, GridError> {
        match degrees.rem_euclid(360) {
            0 => Ok(Rotation::Rotate0),
            90 => Ok(Rotation::Rotate90),
            180 => Ok(Rotation::Rotate180),
            270 => Ok(Rotation::Rotate270),
            _ => Err(GridError::InvalidAngle(degrees)),
        }
    }

    /// The counter-clockwise angle in degrees (0, 90, 180 or 270).
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Rotate0 => 0,
            Rotation::Rotate90 => 90,
            Rotation::Rotate180 => 180,
            Rotation::Rotate270 => 270,
        }
    }

    /// Whether the rotation swaps rows and columns.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Rotate90 | Rotation::Rotate270)
    }
}

/// Rotate 90° counter-clockwise.
pub fn rotate_90<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    reverse_row(&transpose(grid))
}

/// Rotate 180°.
pub fn rotate_180<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    reverse_row(&reverse_column(grid))
}

/// Rotate 270° counter-clockwise (90° clockwise).
pub fn rotate_270<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    reverse_column(&transpose(grid))
}

/// Compute the shape of a grid after rotation without rotating it.
///
/// # Arguments
///
/// * `rows` - Original row count
/// * `cols` - Original column count
/// * `rotation` - Rotation to apply
///
/// # Returns
///
/// Tuple of (new_rows, new_cols).
pub fn rotated_shape(rows: usize, cols: usize, rotation: Rotation) -> (usize, usize) {
    if rotation.swaps_axes() {
        (cols, rows)
    } else {
        (rows, cols)
    }
}

/// Apply a rotation to a grid.
///
/// Always returns a new grid; [`Rotation::Rotate0`] returns a copy.
pub fn apply_rotation<T: Clone>(grid: &Grid<T>, rotation: Rotation) -> Grid<T> {
    log::trace!(
        "rotating {}x{} grid by {} degrees",
        grid.rows(),
        grid.cols(),
        rotation.degrees()
    );
    match rotation {
        Rotation::Rotate0 => grid.clone(),
        Rotation::Rotate90 => rotate_90(grid),
        Rotation::Rotate180 => rotate_180(grid),
        Rotation::Rotate270 => rotate_270(grid),
    }
}

/// Rotate a grid by an angle in degrees (positive = counter-clockwise).
///
/// Fails with [`GridError::InvalidAngle`] when `degrees` is not a multiple
/// of 90.
pub fn rotate_by_degrees<T: Clone>(grid: &Grid<T>, degrees: i32) -> Result<Grid<T>, GridError> {
    let rotation = Rotation::from_degrees(degrees)?;
    Ok(apply_rotation(grid, rotation))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::transform::strategies::grid_strategy;
    use proptest::prelude::*;

    proptest! {
        /// Property: Four quarter turns give back the original grid.
        #[test]
        fn prop_four_quarter_turns_identity(grid in grid_strategy()) {
            let result = rotate_90(&rotate_90(&rotate_90(&rotate_90(&grid))));
            prop_assert_eq!(result, grid);
        }

        /// Property: Two quarter turns equal a half turn.
        #[test]
        fn prop_two_quarter_turns_is_half_turn(grid in grid_strategy()) {
            prop_assert_eq!(rotate_90(&rotate_90(&grid)), rotate_180(&grid));
        }

        /// Property: Three quarter turns equal rotate_270.
        #[test]
        fn prop_three_quarter_turns_is_270(grid in grid_strategy()) {
            prop_assert_eq!(rotate_90(&rotate_90(&rotate_90(&grid))), rotate_270(&grid));
        }

        /// Property: rotate_90 and rotate_270 undo each other.
        #[test]
        fn prop_90_and_270_are_inverses(grid in grid_strategy()) {
            prop_assert_eq!(rotate_270(&rotate_90(&grid)), grid.clone());
            prop_assert_eq!(rotate_90(&rotate_270(&grid)), grid);
        }

        /// Property: Output shape always matches rotated_shape.
        #[test]
        fn prop_shape_matches_rotated_shape(grid in grid_strategy(), quarter in 0i32..4) {
            let rotation = Rotation::from_degrees(quarter * 90).unwrap();
            let result = apply_rotation(&grid, rotation);
            prop_assert_eq!(result.shape(), rotated_shape(grid.rows(), grid.cols(), rotation));
        }

        /// Property: Angles differing by full turns rotate identically.
        #[test]
        fn prop_full_turns_ignored(grid in grid_strategy(), quarter in 0i32..4, turns in -3i32..=3) {
            let base = rotate_by_degrees(&grid, quarter * 90).unwrap();
            let wrapped = rotate_by_degrees(&grid, quarter * 90 + turns * 360).unwrap();
            prop_assert_eq!(base, wrapped);
        }
    }
}
