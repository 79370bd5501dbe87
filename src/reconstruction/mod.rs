//! Parallel placement dispatch and canvas compositing
//!
//! Tile placement tasks are embarrassingly parallel: each reads one tile
//! plus the shared read-only reference image and produces one placement.
//! The compositor then writes all placements into a single canvas.

/// Canvas allocation and tile compositing
pub mod compositor;
/// Parallel dispatch of tile placement tasks
pub mod runner;

pub use compositor::composite;
pub use runner::Reconstruction;
