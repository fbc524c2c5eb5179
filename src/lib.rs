//! Deterministic identicon generation from arbitrary input strings
//!
//! The system hashes an input name into a fixed-length digest, folds the
//! digest into a mirrored 5x5 grid of coded cells, keeps the even-coded
//! cells, and maps the survivors to pixel rectangles painted in a single
//! digest-derived color. Equal names always produce identical images.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Deterministic transform stages from input string to renderable geometry
pub mod pipeline;

pub use io::error::{IdenticonError, Result};
