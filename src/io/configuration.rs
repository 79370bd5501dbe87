//! Reconstruction constants and runtime configuration defaults

// Grid cell geometry used when the source image was sliced
/// Default width of one grid cell in pixels
pub const DEFAULT_CELL_WIDTH: usize = 32;
/// Default height of one grid cell in pixels
pub const DEFAULT_CELL_HEIGHT: usize = 27;

// Tile lookup settings
/// Default directory containing the tile images
pub const DEFAULT_TILE_DIRECTORY: &str = "tiles";
/// Default file extension of the tile images
pub const DEFAULT_TILE_EXTENSION: &str = "jpg";

// Output settings
/// Default path for the reconstructed image
pub const DEFAULT_OUTPUT_PATH: &str = "reconstructed.png";

/// Number of channels in decoded pixel grids
pub const CHANNEL_COUNT: usize = 3;
