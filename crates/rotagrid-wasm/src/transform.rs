//! WASM bindings for grid transforms.
//!
//! Every function returns a new `JsGrid`; the argument is left unchanged.

use crate::types::{to_js_error, JsGrid};
use rotagrid_core::transform as grid_ops;
use wasm_bindgen::prelude::*;

/// Swap rows and columns.
#[wasm_bindgen]
pub fn transpose(grid: &JsGrid) -> JsGrid {
    JsGrid::from_grid(grid_ops::transpose(grid.grid()))
}

/// Reverse the order of rows (vertical flip).
#[wasm_bindgen]
pub fn reverse_row(grid: &JsGrid) -> JsGrid {
    JsGrid::from_grid(grid_ops::reverse_row(grid.grid()))
}

/// Reverse the cells within each row (horizontal flip).
#[wasm_bindgen]
pub fn reverse_column(grid: &JsGrid) -> JsGrid {
    JsGrid::from_grid(grid_ops::reverse_column(grid.grid()))
}

/// Rotate 90° counter-clockwise.
#[wasm_bindgen]
pub fn rotate_90(grid: &JsGrid) -> JsGrid {
    JsGrid::from_grid(grid_ops::rotate_90(grid.grid()))
}

/// Rotate 180°.
#[wasm_bindgen]
pub fn rotate_180(grid: &JsGrid) -> JsGrid {
    JsGrid::from_grid(grid_ops::rotate_180(grid.grid()))
}

/// Rotate 270° counter-clockwise (90° clockwise).
#[wasm_bindgen]
pub fn rotate_270(grid: &JsGrid) -> JsGrid {
    JsGrid::from_grid(grid_ops::rotate_270(grid.grid()))
}

/// Rotate by an angle in degrees (positive = counter-clockwise).
///
/// Throws unless `degrees` is a multiple of 90.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const clockwise = rotate_by_degrees(grid, -90);
/// ```
#[wasm_bindgen]
pub fn rotate_by_degrees(grid: &JsGrid, degrees: i32) -> Result<JsGrid, JsValue> {
    grid_ops::rotate_by_degrees(grid.grid(), degrees)
        .map(JsGrid::from_grid)
        .map_err(to_js_error)
}
