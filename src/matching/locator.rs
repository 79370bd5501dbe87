//! Tile placement through correlation matching and grid snapping

use crate::io::error::{Result, StitchError};
use crate::matching::correlation::{correlation_surface, peak_location};
use crate::spatial::grid::CellGrid;
use crate::spatial::placement::Placement;
use ndarray::Array3;

/// Find the grid-aligned destination of a tile within the reference image
///
/// Computes the correlation surface, takes the best-scoring offset, snaps
/// it onto the cell lattice, and clamps the result so the full tile stays
/// inside the reference bounds. The tile pixels move into the returned
/// placement.
///
/// # Errors
///
/// Returns an error if the tile dimensions differ from the grid cell, the
/// tile does not fit inside the reference, or the channel counts disagree.
/// Callers treat these as per-tile failures and skip the tile.
pub fn locate_tile(reference: &Array3<u8>, tile: Array3<u8>, grid: &CellGrid) -> Result<Placement> {
    let (tile_rows, tile_cols, _) = tile.dim();
    if tile_rows != grid.cell_height() || tile_cols != grid.cell_width() {
        return Err(StitchError::GeometryMismatch {
            reason: format!(
                "tile is {tile_cols}x{tile_rows} but grid cells are {}x{}",
                grid.cell_width(),
                grid.cell_height()
            ),
        });
    }

    let surface = correlation_surface(reference, &tile)?;
    let raw_peak = peak_location(&surface).ok_or(StitchError::Computation {
        operation: "peak search",
        reason: "correlation surface is empty".to_string(),
    })?;

    let (ref_rows, ref_cols, _) = reference.dim();
    let snapped = grid.snap(raw_peak[0], raw_peak[1]);
    let top_left = grid
        .clamp_within(snapped, ref_rows, ref_cols)
        .ok_or_else(|| StitchError::GeometryMismatch {
            reason: format!(
                "reference {ref_cols}x{ref_rows} cannot hold a {}x{} cell",
                grid.cell_width(),
                grid.cell_height()
            ),
        })?;

    Ok(Placement::new(top_left, tile))
}
