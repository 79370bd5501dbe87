//! Command-line interface for image reconstruction

use crate::io::configuration::{
    DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_OUTPUT_PATH, DEFAULT_TILE_DIRECTORY,
    DEFAULT_TILE_EXTENSION,
};
use crate::io::error::{Result, StitchError};
use crate::io::image::{TileDirectory, export_canvas, load_reference};
use crate::io::manifest::load_manifest;
use crate::io::progress::ProgressManager;
use crate::reconstruction::Reconstruction;
use crate::reconstruction::compositor::composite;
use crate::reconstruction::runner::RunSummary;
use crate::spatial::grid::CellGrid;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gridstitch")]
#[command(
    author,
    version,
    about = "Reassemble a grid-sliced image by matching tiles against a reference"
)]
/// Command-line arguments for the reconstruction tool
pub struct Cli {
    /// Reference image the tiles are matched against
    #[arg(value_name = "REFERENCE")]
    pub reference: PathBuf,

    /// JSON manifest listing the tile identifiers
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Directory containing the tile images
    #[arg(short, long, default_value = DEFAULT_TILE_DIRECTORY)]
    pub tiles: PathBuf,

    /// File extension of the tile images
    #[arg(short, long, default_value = DEFAULT_TILE_EXTENSION)]
    pub extension: String,

    /// Output path for the reconstructed image
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Width of one grid cell in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_WIDTH)]
    pub cell_width: usize,

    /// Height of one grid cell in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_HEIGHT)]
    pub cell_height: usize,

    /// Number of worker threads (defaults to available parallelism)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Suppress progress output and the skip report
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates a full reconstruction run from CLI arguments
pub struct ReconstructionJob {
    cli: Cli,
}

impl ReconstructionJob {
    /// Create a job from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the reconstruction pipeline end to end
    ///
    /// Loads the reference image and manifest, places every tile in
    /// parallel, composites the placements, and writes the canvas to the
    /// output path. Individual tile failures are reported to stderr and
    /// skipped; their canvas regions stay black.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid parameters are invalid, the reference
    /// image or manifest cannot be loaded, or the output cannot be written.
    // Allow print for user feedback on skipped tiles
    #[allow(clippy::print_stderr)]
    pub fn run(&self) -> Result<RunSummary> {
        let grid = CellGrid::new(self.cli.cell_width, self.cli.cell_height)?;
        let reference = load_reference(&self.cli.reference)?;
        let descriptors = load_manifest(&self.cli.manifest)?;
        let tile_source = TileDirectory::new(self.cli.tiles.clone(), self.cli.extension.clone());

        let reconstruction = Reconstruction::new(reference, grid)?;
        let progress = if self.cli.should_show_progress() {
            ProgressManager::visible(descriptors.len())
        } else {
            ProgressManager::hidden()
        };

        let summary = match self.cli.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| StitchError::Computation {
                        operation: "worker pool",
                        reason: e.to_string(),
                    })?;
                pool.install(|| reconstruction.place_tiles(&descriptors, &tile_source, &progress))
            }
            None => reconstruction.place_tiles(&descriptors, &tile_source, &progress),
        };
        progress.finish();

        let canvas = composite(reconstruction.canvas_shape(), &summary.placements);
        export_canvas(&canvas, &self.cli.output)?;

        if !self.cli.quiet {
            for skipped in &summary.skipped {
                eprintln!("Skipped tile {}: {}", skipped.id, skipped.error);
            }
        }

        Ok(summary)
    }
}
