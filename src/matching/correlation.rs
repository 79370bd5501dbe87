//! Normalized cross-correlation between a tile and a reference image
//!
//! Slides the tile over every integer offset of the reference and scores
//! each window with cross-correlation normalized by the pixel energy of
//! both operands. Scores are comparable across regions regardless of local
//! brightness; 1.0 means the window matches the tile up to a uniform scale.

use crate::io::error::{Result, StitchError};
use ndarray::{Array2, Array3};

/// Compute the normalized cross-correlation score surface
///
/// The surface has shape `(H - th + 1, W - tw + 1)` for a reference of
/// `H x W` and a tile of `th x tw` pixels. Channels contribute jointly to
/// each score. Windows with zero pixel energy score 0.0.
///
/// # Errors
///
/// Returns an error if the tile is empty, larger than the reference in
/// either axis, or disagrees with the reference on channel count.
pub fn correlation_surface(reference: &Array3<u8>, tile: &Array3<u8>) -> Result<Array2<f64>> {
    let (ref_rows, ref_cols, ref_channels) = reference.dim();
    let (tile_rows, tile_cols, tile_channels) = tile.dim();

    if tile_channels != ref_channels {
        return Err(StitchError::GeometryMismatch {
            reason: format!(
                "tile has {tile_channels} channels but reference has {ref_channels}"
            ),
        });
    }
    if tile_rows == 0 || tile_cols == 0 || tile_rows > ref_rows || tile_cols > ref_cols {
        return Err(StitchError::GeometryMismatch {
            reason: format!(
                "tile {tile_cols}x{tile_rows} does not fit inside reference {ref_cols}x{ref_rows}"
            ),
        });
    }

    let tile_energy = pixel_energy(tile);
    let squared_sums = squared_integral(reference);

    let surface_rows = ref_rows - tile_rows + 1;
    let surface_cols = ref_cols - tile_cols + 1;
    let mut surface = Array2::zeros((surface_rows, surface_cols));

    for row in 0..surface_rows {
        for col in 0..surface_cols {
            let mut numerator = 0.0;
            for tile_row in 0..tile_rows {
                for tile_col in 0..tile_cols {
                    for channel in 0..ref_channels {
                        let reference_value = reference
                            .get((row + tile_row, col + tile_col, channel))
                            .copied()
                            .unwrap_or(0);
                        let tile_value = tile
                            .get((tile_row, tile_col, channel))
                            .copied()
                            .unwrap_or(0);
                        numerator += f64::from(reference_value) * f64::from(tile_value);
                    }
                }
            }

            let window_energy = window_sum(&squared_sums, row, col, tile_rows, tile_cols);
            let denominator = (tile_energy * window_energy).sqrt();
            let score = if denominator > 0.0 {
                numerator / denominator
            } else {
                0.0
            };

            if let Some(cell) = surface.get_mut((row, col)) {
                *cell = score;
            }
        }
    }

    Ok(surface)
}

/// Locate the maximum score in a correlation surface
///
/// Scans in row-major order and keeps the first occurrence of the maximum,
/// which fixes the tie-break when several windows score equally. Returns
/// `None` only for an empty surface.
pub fn peak_location(surface: &Array2<f64>) -> Option<[usize; 2]> {
    let mut best: Option<([usize; 2], f64)> = None;

    for ((row, col), &score) in surface.indexed_iter() {
        let improved = match best {
            Some((_, best_score)) => score > best_score,
            None => true,
        };
        if improved {
            best = Some(([row, col], score));
        }
    }

    best.map(|(position, _)| position)
}

// Total squared pixel magnitude across all channels
fn pixel_energy(image: &Array3<u8>) -> f64 {
    image
        .iter()
        .map(|&value| {
            let value = f64::from(value);
            value * value
        })
        .sum()
}

// Summed-area table over per-pixel squared magnitudes, padded with a zero
// top row and left column so window sums need no boundary branches
fn squared_integral(image: &Array3<u8>) -> Array2<f64> {
    let (rows, cols, channels) = image.dim();
    let mut table = Array2::zeros((rows + 1, cols + 1));

    for row in 0..rows {
        for col in 0..cols {
            let mut squared = 0.0;
            for channel in 0..channels {
                let value = f64::from(image.get((row, col, channel)).copied().unwrap_or(0));
                squared += value * value;
            }

            let above = table.get((row, col + 1)).copied().unwrap_or(0.0);
            let left = table.get((row + 1, col)).copied().unwrap_or(0.0);
            let diagonal = table.get((row, col)).copied().unwrap_or(0.0);
            if let Some(cell) = table.get_mut((row + 1, col + 1)) {
                *cell = squared + above + left - diagonal;
            }
        }
    }

    table
}

// Squared-magnitude sum of the window at (row, col); clamped at zero since
// the table subtraction can go marginally negative in floating point
fn window_sum(table: &Array2<f64>, row: usize, col: usize, height: usize, width: usize) -> f64 {
    let bottom_right = table.get((row + height, col + width)).copied().unwrap_or(0.0);
    let top_right = table.get((row, col + width)).copied().unwrap_or(0.0);
    let bottom_left = table.get((row + height, col)).copied().unwrap_or(0.0);
    let top_left = table.get((row, col)).copied().unwrap_or(0.0);

    (bottom_right - top_right - bottom_left + top_left).max(0.0)
}
