//! Grid-sliced image reconstruction through template matching
//!
//! Locates each tile of a sliced image inside a reference image with
//! normalized cross-correlation, snaps the best match onto the tile grid,
//! and composites the tiles back into a full image.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Correlation matching and tile placement
pub mod matching;
/// Parallel placement dispatch and canvas compositing
pub mod reconstruction;
/// Grid geometry and coordinate snapping
pub mod spatial;

pub use io::error::{Result, StitchError};
