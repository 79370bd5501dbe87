//! Image decoding into pixel grids and canvas export

use crate::io::configuration::CHANNEL_COUNT;
use crate::io::error::{Result, StitchError};
use crate::reconstruction::runner::TileSource;
use image::{Rgb, RgbImage};
use ndarray::Array3;
use std::path::{Path, PathBuf};

/// Decode the reference image into an RGB pixel grid
///
/// The grid is in (row, column, channel) order with [`CHANNEL_COUNT`]
/// channels. A failure here is fatal to the whole run: without a reference
/// image there is nothing to reconstruct.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load_reference<P: AsRef<Path>>(path: P) -> Result<Array3<u8>> {
    let path_buf = path.as_ref().to_path_buf();
    let decoded = image::open(&path_buf).map_err(|e| StitchError::ReferenceLoad {
        path: path_buf,
        source: e,
    })?;

    Ok(grid_from_pixels(&decoded.to_rgb8()))
}

/// Tile image lookup under a root directory
///
/// Resolves `<root>/<id>.<extension>` for each tile identifier and decodes
/// the file on demand. Decode failures are per-tile: the runner records a
/// skip and continues.
#[derive(Debug, Clone)]
pub struct TileDirectory {
    root: PathBuf,
    extension: String,
}

impl TileDirectory {
    /// Create a tile lookup for the given directory and file extension
    pub fn new(root: PathBuf, extension: impl Into<String>) -> Self {
        Self {
            root,
            extension: extension.into(),
        }
    }

    /// Path where the tile image for an identifier is expected
    pub fn resolve(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.{}", self.extension))
    }
}

impl TileSource for TileDirectory {
    fn load(&self, id: &str) -> Result<Array3<u8>> {
        let path = self.resolve(id);
        let decoded = image::open(&path).map_err(|e| StitchError::TileLoad { path, source: e })?;

        Ok(grid_from_pixels(&decoded.to_rgb8()))
    }
}

/// Write the reconstructed canvas to disk
///
/// The encoding follows the output path's extension. Parent directories
/// are created as needed.
///
/// # Errors
///
/// Returns an error if a parent directory cannot be created or the image
/// cannot be encoded and written.
pub fn export_canvas<P: AsRef<Path>>(canvas: &Array3<u8>, path: P) -> Result<()> {
    let path_buf = path.as_ref().to_path_buf();
    let (rows, cols, _) = canvas.dim();

    let mut pixels = RgbImage::new(cols as u32, rows as u32);
    for (x, y, pixel) in pixels.enumerate_pixels_mut() {
        let row = y as usize;
        let col = x as usize;
        *pixel = Rgb([
            canvas.get((row, col, 0)).copied().unwrap_or(0),
            canvas.get((row, col, 1)).copied().unwrap_or(0),
            canvas.get((row, col, 2)).copied().unwrap_or(0),
        ]);
    }

    if let Some(parent) = path_buf.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| StitchError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    pixels.save(&path_buf).map_err(|e| StitchError::CanvasExport {
        path: path_buf,
        source: e,
    })
}

// Transpose decoded pixels into (row, column, channel) order
fn grid_from_pixels(pixels: &RgbImage) -> Array3<u8> {
    let (width, height) = (pixels.width() as usize, pixels.height() as usize);
    let mut grid = Array3::zeros((height, width, CHANNEL_COUNT));

    for (x, y, pixel) in pixels.enumerate_pixels() {
        for (channel, &value) in pixel.0.iter().enumerate() {
            if let Some(cell) = grid.get_mut((y as usize, x as usize, channel)) {
                *cell = value;
            }
        }
    }

    grid
}
