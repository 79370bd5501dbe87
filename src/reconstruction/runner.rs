//! Parallel dispatch of tile placement tasks

use crate::io::error::{Result, StitchError};
use crate::io::manifest::TileDescriptor;
use crate::matching::locator::locate_tile;
use crate::spatial::grid::CellGrid;
use crate::spatial::placement::Placement;
use ndarray::Array3;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Provides tile pixel data for an identifier
///
/// Implementations resolve an identifier to decoded pixel data. Loading is
/// the per-tile failure boundary: an error skips that tile only and never
/// aborts the run.
pub trait TileSource: Sync {
    /// Load the pixel data for one tile
    ///
    /// # Errors
    ///
    /// Returns an error if the tile cannot be resolved or decoded.
    fn load(&self, id: &str) -> Result<Array3<u8>>;
}

/// Observer notified as tile placements complete
///
/// Completion order is unconstrained; callbacks arrive from worker threads
/// in whatever order tasks finish. Display only, no effect on correctness.
pub trait ProgressObserver: Sync {
    /// Called after each tile finishes, with the completed and total counts
    fn tile_completed(&self, completed: usize, total: usize);
}

/// Observer that discards all notifications
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressObserver for SilentProgress {
    fn tile_completed(&self, _completed: usize, _total: usize) {}
}

/// A tile that could not be placed
#[derive(Debug)]
pub struct SkippedTile {
    /// Identifier of the skipped tile
    pub id: String,
    /// Why the tile was skipped
    pub error: StitchError,
}

/// Outcome of placing every tile in a manifest
#[derive(Debug)]
pub struct RunSummary {
    /// Successfully resolved placements, in manifest order
    pub placements: Vec<Placement>,
    /// Tiles skipped because they failed to load or place
    pub skipped: Vec<SkippedTile>,
}

impl RunSummary {
    /// Total number of tiles processed
    pub fn total(&self) -> usize {
        self.placements.len() + self.skipped.len()
    }
}

/// Immutable matching context shared by every placement task
///
/// Holds the reference image and the grid geometry. Tasks only read from
/// the context, so it is shared across worker threads without locking.
pub struct Reconstruction {
    reference: Array3<u8>,
    grid: CellGrid,
}

impl Reconstruction {
    /// Create a reconstruction context
    ///
    /// # Errors
    ///
    /// Returns an error if the reference image is smaller than one grid
    /// cell in either axis.
    pub fn new(reference: Array3<u8>, grid: CellGrid) -> Result<Self> {
        let (rows, cols, _) = reference.dim();
        if rows < grid.cell_height() || cols < grid.cell_width() {
            return Err(StitchError::GeometryMismatch {
                reason: format!(
                    "reference {cols}x{rows} is smaller than one {}x{} cell",
                    grid.cell_width(),
                    grid.cell_height()
                ),
            });
        }

        Ok(Self { reference, grid })
    }

    /// The shared reference image
    pub const fn reference(&self) -> &Array3<u8> {
        &self.reference
    }

    /// The grid geometry used for snapping
    pub const fn grid(&self) -> CellGrid {
        self.grid
    }

    /// Shape of a canvas matching the reference image
    pub fn canvas_shape(&self) -> (usize, usize, usize) {
        self.reference.dim()
    }

    /// Place every manifest tile against the reference image
    ///
    /// Runs one task per descriptor on the rayon worker pool. Each task
    /// loads its tile, locates it, and reports completion to the observer;
    /// outcomes are collected back in manifest order. Tiles that fail to
    /// load or place become skip entries instead of aborting the run.
    pub fn place_tiles(
        &self,
        descriptors: &[TileDescriptor],
        source: &impl TileSource,
        progress: &impl ProgressObserver,
    ) -> RunSummary {
        let total = descriptors.len();
        let completed = AtomicUsize::new(0);

        let outcomes: Vec<(&TileDescriptor, Result<Placement>)> = descriptors
            .par_iter()
            .map(|descriptor| {
                let outcome = source
                    .load(&descriptor.id)
                    .and_then(|tile| locate_tile(&self.reference, tile, &self.grid));

                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                progress.tile_completed(done, total);

                (descriptor, outcome)
            })
            .collect();

        let mut placements = Vec::new();
        let mut skipped = Vec::new();
        for (descriptor, outcome) in outcomes {
            match outcome {
                Ok(placement) => placements.push(placement),
                Err(error) => skipped.push(SkippedTile {
                    id: descriptor.id.clone(),
                    error,
                }),
            }
        }

        RunSummary {
            placements,
            skipped,
        }
    }
}
