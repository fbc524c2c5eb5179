//! Error types for identicon generation and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all identicon operations
#[derive(Debug)]
pub enum IdenticonError {
    /// No usable input name was provided
    ///
    /// Raised when a name argument is blank after trimming, or when the
    /// interactive prompt reaches end-of-input without a non-empty line.
    EmptyName,

    /// Cell index falls outside the fixed grid tiling
    GeometryRange {
        /// The out-of-range cell index
        index: u32,
        /// Number of cells in the grid
        cell_count: usize,
    },

    /// Failed reading the name from the interactive prompt
    Prompt {
        /// Description of the prompt operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save the rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for IdenticonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => {
                write!(f, "No name provided: input must contain at least one non-whitespace character")
            }
            Self::GeometryRange { index, cell_count } => {
                write!(f, "Cell index {index} is outside the {cell_count}-cell grid")
            }
            Self::Prompt { operation, source } => {
                write!(f, "Prompt error during {operation}: {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for IdenticonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Prompt { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::EmptyName | Self::GeometryRange { .. } => None,
        }
    }
}

/// Convenience type alias for identicon results
pub type Result<T> = std::result::Result<T, IdenticonError>;

impl From<std::io::Error> for IdenticonError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}
