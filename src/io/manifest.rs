//! Tile manifest parsing
//!
//! The manifest is a JSON array of records, each carrying at least the
//! identifier used to resolve that tile's image file. Record order drives
//! task dispatch order only; it has no effect on the final canvas.

use crate::io::error::{Result, StitchError};
use serde::Deserialize;
use std::path::Path;

/// One manifest record describing a single tile
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TileDescriptor {
    /// Identifier used to resolve the tile's image file
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
}

// Slicing scripts emit ids as either strings or bare numbers; both resolve
// to the same file names
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(value) => value.to_string(),
        RawId::Text(value) => value,
    })
}

/// Load and parse a tile manifest document
///
/// A malformed manifest is fatal: a document that cannot be trusted gives
/// no tile list to dispatch.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid JSON
/// sequence of tile records.
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<TileDescriptor>> {
    let path_buf = path.as_ref().to_path_buf();
    let contents = std::fs::read_to_string(&path_buf).map_err(|e| StitchError::FileSystem {
        path: path_buf.clone(),
        operation: "read manifest",
        source: e,
    })?;

    serde_json::from_str(&contents).map_err(|e| StitchError::ManifestParse {
        path: path_buf,
        source: e,
    })
}
