//! Resolved tile destinations within the reconstructed canvas

use ndarray::Array3;

/// The resolved rectangular destination of one tile
///
/// Produced once per tile by the locator and consumed once by the
/// compositor. Corners are in (row, column) order; the bottom-right corner
/// is exclusive and derived from the pixel block dimensions.
#[derive(Debug, Clone)]
pub struct Placement {
    /// Top-left corner of the destination region
    pub top_left: [usize; 2],
    /// Exclusive bottom-right corner of the destination region
    pub bottom_right: [usize; 2],
    /// Tile pixel data written into the destination region
    pub pixels: Array3<u8>,
}

impl Placement {
    /// Create a placement from a snapped top-left corner and tile pixels
    pub fn new(top_left: [usize; 2], pixels: Array3<u8>) -> Self {
        let (rows, cols, _) = pixels.dim();
        let bottom_right = [top_left[0] + rows, top_left[1] + cols];

        Self {
            top_left,
            bottom_right,
            pixels,
        }
    }

    /// Height of the destination region in pixels
    pub const fn height(&self) -> usize {
        self.bottom_right[0] - self.top_left[0]
    }

    /// Width of the destination region in pixels
    pub const fn width(&self) -> usize {
        self.bottom_right[1] - self.top_left[1]
    }

    /// Whether the destination region lies fully inside a canvas
    pub const fn fits_within(&self, canvas_rows: usize, canvas_cols: usize) -> bool {
        self.bottom_right[0] <= canvas_rows && self.bottom_right[1] <= canvas_cols
    }
}
