//! WASM-compatible wrapper type for grids.
//!
//! Cells cross the boundary as `BigInt64Array` (flat, row-major) or as nested
//! arrays of numbers via `toRows`/`fromRows`.

use rotagrid_core::{Grid, GridError};
use wasm_bindgen::prelude::*;

/// A rectangular integer grid for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct JsGrid {
    inner: Grid<i64>,
}

#[wasm_bindgen]
impl JsGrid {
    /// Create a grid from its shape and row-major cells.
    ///
    /// Throws if either dimension is zero or `cells.length != rows * cols`.
    #[wasm_bindgen(constructor)]
    pub fn new(rows: usize, cols: usize, cells: Vec<i64>) -> Result<JsGrid, JsValue> {
        Self::try_new(rows, cols, cells).map_err(to_js_error)
    }

    /// Create a grid from a nested array such as `[[1, 2], [3, 4]]`.
    ///
    /// Throws on empty or jagged input.
    #[wasm_bindgen(js_name = fromRows)]
    pub fn from_rows(rows: JsValue) -> Result<JsGrid, JsValue> {
        let inner: Grid<i64> = serde_wasm_bindgen::from_value(rows)
            .map_err(|e| JsValue::from_str(&format!("Invalid grid: {}", e)))?;
        Ok(Self { inner })
    }

    /// Number of rows
    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    /// Number of columns
    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    /// Returns the row-major cells as a BigInt64Array (copied).
    pub fn cells(&self) -> Vec<i64> {
        self.inner.cells().to_vec()
    }

    /// Returns the grid as a nested array of rows.
    #[wasm_bindgen(js_name = toRows)]
    pub fn to_rows(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Space-separated rows, one per line.
    #[wasm_bindgen(js_name = toString)]
    pub fn render(&self) -> String {
        self.inner.to_string()
    }
}

impl JsGrid {
    pub(crate) fn try_new(rows: usize, cols: usize, cells: Vec<i64>) -> Result<Self, GridError> {
        Grid::from_vec(rows, cols, cells).map(Self::from_grid)
    }

    pub(crate) fn from_grid(inner: Grid<i64>) -> Self {
        Self { inner }
    }

    pub(crate) fn grid(&self) -> &Grid<i64> {
        &self.inner
    }
}

/// Convert a core grid error into a JavaScript exception value.
pub(crate) fn to_js_error(err: GridError) -> JsValue {
    JsValue::from_str(&err.to_string())
}


/// WASM-specific tests that require JsValue.
///
/// These tests cross the JavaScript boundary (`fromRows`, `toRows` and
/// thrown errors) and can only run on wasm32 targets. Use `wasm-pack test`
/// to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn js_rows(rows: &[Vec<i64>]) -> JsValue {
        serde_wasm_bindgen::to_value(rows).unwrap()
    }

    fn error_message(err: JsValue) -> String {
        err.as_string().expect("error should be a string")
    }

    #[wasm_bindgen_test]
    fn test_from_rows_to_rows() {
        let grid = JsGrid::from_rows(js_rows(&[vec![1, 2, 3], vec![4, 5, 6]])).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.cells(), vec![1, 2, 3, 4, 5, 6]);

        let rows: Vec<Vec<i64>> = serde_wasm_bindgen::from_value(grid.to_rows().unwrap()).unwrap();
        assert_eq!(rows, vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[wasm_bindgen_test]
    fn test_from_rows_rejects_jagged() {
        let err = JsGrid::from_rows(js_rows(&[vec![1, 2], vec![3]])).unwrap_err();
        let message = error_message(err);
        assert!(message.contains("Jagged grid"), "error was {}", message);
    }

    #[wasm_bindgen_test]
    fn test_from_rows_rejects_empty() {
        let err = JsGrid::from_rows(js_rows(&[])).unwrap_err();
        let message = error_message(err);
        assert!(message.contains("at least one row"), "error was {}", message);
    }

    #[wasm_bindgen_test]
    fn test_from_rows_rejects_non_array() {
        let value = serde_wasm_bindgen::to_value(&42).unwrap();
        assert!(JsGrid::from_rows(value).is_err());
    }

    #[wasm_bindgen_test]
    fn test_constructor_rejects_wrong_cell_count() {
        let err = JsGrid::new(2, 2, vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            error_message(err),
            "Invalid cell data: expected 2x2 = 4 cells, got 3"
        );
    }
}
