//! Rotagrid WASM - WebAssembly bindings for Rotagrid
//!
//! This crate exposes the rotagrid-core grid transforms to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - `JsGrid`, the JavaScript-facing grid wrapper
//! - `matrix` - Sequential demonstration grids
//! - `transform` - Transpose, flips and rotations
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsGrid, rotate_90 } from '@rotagrid/wasm';
//!
//! await init();
//!
//! const grid = JsGrid.fromRows([[1, 2, 3], [4, 5, 6]]);
//! console.log(rotate_90(grid).toRows()); // [[3, 6], [2, 5], [1, 4]]
//! ```

use wasm_bindgen::prelude::*;

mod matrix;
mod transform;
mod types;

// Re-export public types
pub use matrix::make_matrix;
pub use transform::{
    reverse_column, reverse_row, rotate_180, rotate_270, rotate_90, rotate_by_degrees, transpose,
};
pub use types::JsGrid;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
