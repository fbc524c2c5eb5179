//! Input/output operations and error handling
//!
//! Everything fallible lives here: argument parsing, the interactive
//! prompt, canvas rendering, and PNG export. The transform pipeline
//! itself is pure.

/// Command-line interface and run orchestration
pub mod cli;
/// Canvas geometry constants and output defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Canvas rendering and PNG export
pub mod image;
/// Interactive name prompt with re-prompting on blank input
pub mod prompt;
