//! Pipeline orchestration producing a complete identicon description
//!
//! Runs every transform stage in order and bundles the results into a
//! single value the render sink can consume. The computation is pure and
//! single-pass: no retries, no shared state, no blocking.

use crate::io::error::Result;
use crate::pipeline::color::{self, FillColor};
use crate::pipeline::digest::{self, DigestBytes};
use crate::pipeline::geometry::{self, PixelRect};
use crate::pipeline::grid;
use crate::pipeline::selection;

/// Complete render-ready description of one identicon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identicon {
    /// Digest the image was derived from
    pub digest: DigestBytes,
    /// Fill color shared by all painted rectangles
    pub color: FillColor,
    /// Rectangles to paint, in painter order
    pub pixel_map: Vec<PixelRect>,
}

/// Run the full transform pipeline for an input name
///
/// Equal names always yield identical identicons. An input whose grid
/// contains no even-coded cells produces an empty pixel map, which the
/// render sink turns into a plain background image.
///
/// # Errors
///
/// Returns [`crate::IdenticonError::GeometryRange`] if a cell index
/// escapes the fixed tiling; unreachable for grids built here, checked
/// defensively by the geometry stage.
pub fn generate(name: &str) -> Result<Identicon> {
    let bytes = digest::hash_input(name);
    let fill = color::pick_color(&bytes);
    let cells = grid::build_grid(&bytes);
    let selected = selection::select_even_cells(cells);
    let pixel_map = geometry::build_pixel_map(&selected)?;

    Ok(Identicon {
        digest: bytes,
        color: fill,
        pixel_map,
    })
}
