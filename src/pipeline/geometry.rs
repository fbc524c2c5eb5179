//! Pixel-rectangle mapping for surviving grid cells
//!
//! Converts flat cell indices into canvas-aligned squares. Indices 0..=24
//! tile the canvas exactly; anything outside that range is rejected.

use crate::io::configuration::{CELL_SIZE, GRID_CELL_COUNT, GRID_COLUMNS};
use crate::io::error::{IdenticonError, Result};
use crate::pipeline::grid::GridCell;

/// Canvas-aligned square covered by one grid cell, in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Upper-left corner
    pub top_left: (u32, u32),
    /// Lower-right corner, one cell size beyond `top_left` on both axes
    pub bottom_right: (u32, u32),
}

impl PixelRect {
    /// Compute the rectangle covering the cell at a flat grid index
    const fn from_cell_index(index: u32) -> Self {
        let columns = GRID_COLUMNS as u32;
        let x = (index % columns) * CELL_SIZE;
        let y = (index / columns) * CELL_SIZE;
        Self {
            top_left: (x, y),
            bottom_right: (x + CELL_SIZE, y + CELL_SIZE),
        }
    }
}

/// Map surviving cells to their pixel rectangles, order preserved
///
/// Emits one rectangle per cell in sequence order. An empty cell slice
/// yields an empty rectangle sequence.
///
/// # Errors
///
/// Returns [`IdenticonError::GeometryRange`] if a cell index falls
/// outside the fixed 5x5 tiling. Unreachable for grids built by this
/// pipeline, but validated regardless.
pub fn build_pixel_map(cells: &[GridCell]) -> Result<Vec<PixelRect>> {
    cells
        .iter()
        .map(|cell| {
            if (cell.index as usize) < GRID_CELL_COUNT {
                Ok(PixelRect::from_cell_index(cell.index))
            } else {
                Err(IdenticonError::GeometryRange {
                    index: cell.index,
                    cell_count: GRID_CELL_COUNT,
                })
            }
        })
        .collect()
}
