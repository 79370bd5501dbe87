//! Error types for reconstruction operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all reconstruction operations
///
/// Fatal failures (reference image, manifest, output) abort the run;
/// per-tile failures (`TileLoad`, tile-level `GeometryMismatch`) are
/// recorded as skips by the runner and never escape it.
#[derive(Debug)]
pub enum StitchError {
    /// Failed to load the reference image from the filesystem
    ReferenceLoad {
        /// Path to the reference image
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to decode an individual tile image
    TileLoad {
        /// Path to the tile image
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Tile manifest is not a valid JSON sequence of tile records
    ManifestParse {
        /// Path to the manifest document
        path: PathBuf,
        /// Underlying JSON parsing error
        source: serde_json::Error,
    },

    /// Image geometry does not meet matching requirements
    GeometryMismatch {
        /// Description of the mismatch
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the reconstructed canvas to disk
    CanvasExport {
        /// Path where the export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for StitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReferenceLoad { path, source } => {
                write!(
                    f,
                    "Failed to load reference image '{}': {source}",
                    path.display()
                )
            }
            Self::TileLoad { path, source } => {
                write!(f, "Failed to load tile '{}': {source}", path.display())
            }
            Self::ManifestParse { path, source } => {
                write!(f, "Failed to parse manifest '{}': {source}", path.display())
            }
            Self::GeometryMismatch { reason } => {
                write!(f, "Geometry mismatch: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::CanvasExport { path, source } => {
                write!(
                    f,
                    "Failed to export canvas to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for StitchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReferenceLoad { source, .. }
            | Self::TileLoad { source, .. }
            | Self::CanvasExport { source, .. } => Some(source),
            Self::ManifestParse { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for reconstruction results
pub type Result<T> = std::result::Result<T, StitchError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> StitchError {
    StitchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
