//! Parity-based cell filtering
//!
//! Only even-coded cells are painted; odd-coded cells fall through to the
//! background canvas.

use crate::pipeline::grid::GridCell;

/// Keep only the cells whose code is even, preserving relative order
///
/// Survivors keep their `code` and `index` untouched. A grid with no even
/// codes yields an empty selection, which renders downstream as a plain
/// background image.
pub fn select_even_cells(cells: Vec<GridCell>) -> Vec<GridCell> {
    cells.into_iter().filter(|cell| cell.code % 2 == 0).collect()
}
