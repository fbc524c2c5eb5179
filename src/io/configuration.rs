//! Canvas geometry constants and output defaults

// Canvas geometry
/// Width and height of the square output canvas in pixels
pub const CANVAS_SIZE: u32 = 250;
/// Width and height of one grid cell in pixels
pub const CELL_SIZE: u32 = 50;

// Grid shape
/// Number of cell columns (and rows) in the identicon grid
pub const GRID_COLUMNS: usize = 5;
/// Total cell count in the flattened grid
pub const GRID_CELL_COUNT: usize = GRID_COLUMNS * GRID_COLUMNS;
/// Number of digest bytes seeding one grid row before mirroring
pub const ROW_SEED_LENGTH: usize = 3;

// Rendering
/// Solid background color painted before any cells
pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];

// Output settings
/// Directory where images are written unless overridden
pub const DEFAULT_OUTPUT_DIR: &str = "images";
/// File extension of generated images
pub const OUTPUT_EXTENSION: &str = "png";

/// Text shown when asking for a name interactively
pub const NAME_PROMPT: &str = "What is your name? ";
