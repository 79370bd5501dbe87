//! Canvas allocation and tile compositing

use crate::spatial::placement::Placement;
use ndarray::Array3;

/// Composite placements onto a zero-filled canvas
///
/// Allocates a black canvas of the given shape and writes each placement's
/// pixels into its destination region. Overlapping regions resolve to the
/// last placement applied; non-overlapping placements produce the same
/// canvas in any application order. A placement whose region falls outside
/// the canvas, or whose pixel block does not match its region, is ignored.
pub fn composite(canvas_shape: (usize, usize, usize), placements: &[Placement]) -> Array3<u8> {
    let (canvas_rows, canvas_cols, canvas_channels) = canvas_shape;
    let mut canvas = Array3::zeros(canvas_shape);

    for placement in placements {
        let (tile_rows, tile_cols, tile_channels) = placement.pixels.dim();
        if !placement.fits_within(canvas_rows, canvas_cols) || tile_channels != canvas_channels {
            continue;
        }
        if placement.height() != tile_rows || placement.width() != tile_cols {
            continue;
        }

        for tile_row in 0..tile_rows {
            for tile_col in 0..tile_cols {
                for channel in 0..tile_channels {
                    let value = placement
                        .pixels
                        .get((tile_row, tile_col, channel))
                        .copied()
                        .unwrap_or(0);
                    if let Some(cell) = canvas.get_mut((
                        placement.top_left[0] + tile_row,
                        placement.top_left[1] + tile_col,
                        channel,
                    )) {
                        *cell = value;
                    }
                }
            }
        }
    }

    canvas
}
