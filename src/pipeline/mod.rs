//! Deterministic transform stages from input string to renderable geometry
//!
//! Data flows strictly forward: the input string becomes digest bytes,
//! the digest becomes a mirrored cell grid, the grid is filtered by code
//! parity, and surviving cells become pixel rectangles. The fill color is
//! computed independently from the same digest bytes.

/// Fill color derivation from the leading digest bytes
pub mod color;
/// Input hashing into fixed-length digest bytes
pub mod digest;
/// Pipeline orchestration producing a complete identicon description
pub mod executor;
/// Pixel-rectangle mapping for surviving grid cells
pub mod geometry;
/// Mirrored grid construction from digest bytes
pub mod grid;
/// Parity-based cell filtering
pub mod selection;

pub use executor::Identicon;
