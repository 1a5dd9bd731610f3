//! WASM bindings for demonstration grids.

use crate::types::{to_js_error, JsGrid};
use rotagrid_core::{try_make_square, MatrixSize};
use wasm_bindgen::prelude::*;

/// Build a square grid of sequential integers.
///
/// The sign of `row_size` is ignored and `0` produces the default 4x4 grid.
/// Throws when the grid is too large to allocate.
///
/// # Example (TypeScript)
///
/// ```typescript
/// make_matrix(-2).toRows(); // [[1, 2], [3, 4]]
/// ```
#[wasm_bindgen]
pub fn make_matrix(row_size: i32) -> Result<JsGrid, JsValue> {
    try_make_square(MatrixSize::from_signed(i64::from(row_size)))
        .map(JsGrid::from_grid)
        .map_err(to_js_error)
}
