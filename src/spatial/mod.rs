//! Spatial data structures for grid-aligned placement
//!
//! This module contains the grid geometry used to quantize raw match
//! coordinates and the placement rectangles consumed by the compositor.

/// Grid cell geometry and coordinate snapping
pub mod grid;
/// Resolved tile destinations within the reconstructed canvas
pub mod placement;

pub use grid::CellGrid;
pub use placement::Placement;
