//! Canvas rendering and PNG export
//!
//! The render sink: paints an identicon's rectangles onto a solid
//! background canvas and persists the result as a PNG file.

use crate::io::configuration::{BACKGROUND_COLOR, CANVAS_SIZE};
use crate::io::error::{IdenticonError, Result};
use crate::pipeline::Identicon;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Rasterize an identicon onto a solid background canvas
///
/// Rectangles are painted in sequence order, later ones overwriting
/// earlier ones where they overlap (cells never do by construction). An
/// empty pixel map yields a plain background image.
pub fn render_canvas(identicon: &Identicon) -> RgbaImage {
    let mut canvas = ImageBuffer::from_pixel(CANVAS_SIZE, CANVAS_SIZE, Rgba(BACKGROUND_COLOR));

    for rect in &identicon.pixel_map {
        let (x0, y0) = rect.top_left;
        let (x1, y1) = rect.bottom_right;
        for y in y0..y1.min(CANVAS_SIZE) {
            for x in x0..x1.min(CANVAS_SIZE) {
                canvas.put_pixel(x, y, Rgba(identicon.color));
            }
        }
    }

    canvas
}

/// Render an identicon and save it as a PNG file
///
/// Creates the parent directory of `output_path` when it does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_identicon_as_png(identicon: &Identicon, output_path: &Path) -> Result<()> {
    let canvas = render_canvas(identicon);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| IdenticonError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .save(output_path)
        .map_err(|e| IdenticonError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
