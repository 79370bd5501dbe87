//! Input/output operations and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Reconstruction constants and runtime defaults
pub mod configuration;
/// Error types for reconstruction operations
pub mod error;
/// Image decoding into pixel grids and canvas export
pub mod image;
/// Tile manifest parsing
pub mod manifest;
/// Progress display for parallel tile placement
pub mod progress;
