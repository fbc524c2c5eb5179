//! Fill color derivation from the leading digest bytes

use crate::pipeline::digest::DigestBytes;

/// RGBA fill color shared by every painted cell in one identicon
pub type FillColor = [u8; 4];

/// Alpha channel value for fully opaque output
const OPAQUE_ALPHA: u8 = 255;

/// Derive the fill color from the first three digest bytes
///
/// The leading bytes become the red, green, and blue channels; alpha is
/// always fully opaque. The rest of the digest never affects the color.
pub const fn pick_color(bytes: &DigestBytes) -> FillColor {
    let [r, g, b] = bytes.leading_triplet();
    [r, g, b, OPAQUE_ALPHA]
}
