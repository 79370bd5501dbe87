//! Grid cell geometry and coordinate snapping

use crate::io::error::{Result, invalid_parameter};

/// Snap a coordinate to the nearest multiple of a cell size
///
/// Rounds to the nearest grid line. A remainder of exactly half a cell
/// rounds up; a zero cell size leaves the coordinate unchanged.
pub const fn snap_to_cell(coordinate: usize, cell_size: usize) -> usize {
    if cell_size == 0 {
        return coordinate;
    }

    let remainder = coordinate % cell_size;
    if remainder * 2 >= cell_size {
        coordinate + (cell_size - remainder)
    } else {
        coordinate - remainder
    }
}

/// Tile-grid cell dimensions used to quantize match coordinates
///
/// Correlation peaks are rarely pixel-exact; snapping them onto this
/// lattice restores the alignment the slicing grid had. Both dimensions
/// are validated to be positive at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellGrid {
    cell_width: usize,
    cell_height: usize,
}

impl CellGrid {
    /// Create a cell grid from the configured cell dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn new(cell_width: usize, cell_height: usize) -> Result<Self> {
        if cell_width == 0 {
            return Err(invalid_parameter(
                "cell_width",
                &cell_width,
                &"cell dimensions must be positive",
            ));
        }
        if cell_height == 0 {
            return Err(invalid_parameter(
                "cell_height",
                &cell_height,
                &"cell dimensions must be positive",
            ));
        }

        Ok(Self {
            cell_width,
            cell_height,
        })
    }

    /// Width of one grid cell in pixels
    pub const fn cell_width(&self) -> usize {
        self.cell_width
    }

    /// Height of one grid cell in pixels
    pub const fn cell_height(&self) -> usize {
        self.cell_height
    }

    /// Snap a raw match coordinate onto the cell lattice
    ///
    /// The row axis snaps by the cell height, the column axis by the cell
    /// width; the axes are independent.
    pub const fn snap(&self, row: usize, column: usize) -> [usize; 2] {
        [
            snap_to_cell(row, self.cell_height),
            snap_to_cell(column, self.cell_width),
        ]
    }

    /// Clamp a snapped top-left corner so a full cell stays inside a canvas
    ///
    /// Snapping can round a border match past the last cell that fits the
    /// canvas; the corner is pulled back instead of rejecting the tile.
    /// Returns `None` when the canvas cannot hold a single cell.
    pub const fn clamp_within(
        &self,
        position: [usize; 2],
        canvas_rows: usize,
        canvas_cols: usize,
    ) -> Option<[usize; 2]> {
        if canvas_rows < self.cell_height || canvas_cols < self.cell_width {
            return None;
        }

        let max_row = canvas_rows - self.cell_height;
        let max_col = canvas_cols - self.cell_width;
        let row = if position[0] > max_row {
            max_row
        } else {
            position[0]
        };
        let col = if position[1] > max_col {
            max_col
        } else {
            position[1]
        };
        Some([row, col])
    }
}
