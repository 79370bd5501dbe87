//! Correlation matching and tile placement
//!
//! This module contains the substantive algorithm of the crate:
//! - Normalized cross-correlation score surfaces
//! - Peak search with a fixed row-major tie-break
//! - Grid-snapped tile location

/// Normalized cross-correlation between a tile and a reference image
pub mod correlation;
/// Tile placement through correlation matching and grid snapping
pub mod locator;

pub use locator::locate_tile;
