//! Mirrored grid construction from digest bytes
//!
//! Splits the digest into rows of three bytes and mirrors each row around
//! its last element, which gives the final image its left-right symmetry.
//! The trailing digest byte does not fill a complete row and takes no
//! part in the image.

use crate::io::configuration::ROW_SEED_LENGTH;
use crate::pipeline::digest::DigestBytes;

/// One cell of the flattened 5x5 identicon grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Byte value copied from the digest, mirrored within its row
    pub code: u8,
    /// Position in the flattened grid, assigned in emission order
    pub index: u32,
}

/// Build the flattened, mirrored cell grid from digest bytes
///
/// The digest is split into consecutive chunks of [`ROW_SEED_LENGTH`]
/// bytes; the incomplete trailing chunk is discarded. Each chunk
/// `[a, b, c]` becomes the mirrored row `[a, b, c, b, a]`, and the rows
/// are concatenated into one flat sequence of 25 cells with contiguous
/// indices starting at 0.
pub fn build_grid(bytes: &DigestBytes) -> Vec<GridCell> {
    bytes
        .as_bytes()
        .chunks_exact(ROW_SEED_LENGTH)
        .filter_map(|chunk| match *chunk {
            [a, b, c] => Some([a, b, c, b, a]),
            _ => None,
        })
        .flatten()
        .enumerate()
        .map(|(index, code)| GridCell {
            code,
            index: index as u32,
        })
        .collect()
}
