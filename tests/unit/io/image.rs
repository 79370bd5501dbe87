//! Tests for image decoding and canvas export

#[cfg(test)]
mod tests {
    use gridstitch::StitchError;
    use gridstitch::io::image::{TileDirectory, export_canvas, load_reference};
    use gridstitch::reconstruction::runner::TileSource;
    use ndarray::Array3;
    use std::path::PathBuf;

    fn patterned_canvas(rows: usize, cols: usize) -> Array3<u8> {
        Array3::from_shape_fn((rows, cols, 3), |(row, col, channel)| {
            ((row * 11 + col * 7 + channel * 3) % 256) as u8
        })
    }

    fn tempdir() -> tempfile::TempDir {
        match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(error) => unreachable!("tempdir should create: {error}"),
        }
    }

    // Tests a canvas survives a PNG export and reload unchanged
    // Verified by transposing rows and columns in the export
    #[test]
    fn test_export_reload_round_trip() {
        let dir = tempdir();
        let path = dir.path().join("canvas.png");
        let canvas = patterned_canvas(5, 7);

        assert!(export_canvas(&canvas, &path).is_ok());

        match load_reference(&path) {
            Ok(reloaded) => assert_eq!(reloaded, canvas),
            Err(error) => unreachable!("canvas should reload: {error}"),
        }
    }

    // Tests export creates missing parent directories
    // Verified by removing the create_dir_all call
    #[test]
    fn test_export_creates_parent_directories() {
        let dir = tempdir();
        let path = dir.path().join("nested").join("deeper").join("canvas.png");

        assert!(export_canvas(&patterned_canvas(4, 4), &path).is_ok());
        assert!(path.exists());
    }

    // Tests a missing reference image is a fatal load error
    #[test]
    fn test_missing_reference_is_fatal() {
        let dir = tempdir();
        let missing = dir.path().join("absent.png");

        assert!(matches!(
            load_reference(&missing),
            Err(StitchError::ReferenceLoad { .. })
        ));
    }

    // Tests identifier-to-path resolution under the tile root
    // Verified by dropping the extension from the resolved name
    #[test]
    fn test_tile_directory_resolution() {
        let directory = TileDirectory::new(PathBuf::from("pieces"), "jpg");

        assert_eq!(directory.resolve("42"), PathBuf::from("pieces/42.jpg"));
        assert_eq!(directory.resolve("3_1"), PathBuf::from("pieces/3_1.jpg"));
    }

    // Tests tiles load back exactly as written
    #[test]
    fn test_tile_directory_load() {
        let dir = tempdir();
        let tile = patterned_canvas(6, 8);
        assert!(export_canvas(&tile, dir.path().join("5.png")).is_ok());

        let directory = TileDirectory::new(dir.path().to_path_buf(), "png");
        match directory.load("5") {
            Ok(loaded) => assert_eq!(loaded, tile),
            Err(error) => unreachable!("tile should load: {error}"),
        }
    }

    // Tests a missing tile is a per-tile load error naming its path
    #[test]
    fn test_missing_tile_is_per_tile_error() {
        let dir = tempdir();
        let directory = TileDirectory::new(dir.path().to_path_buf(), "png");

        match directory.load("9") {
            Err(StitchError::TileLoad { path, .. }) => {
                assert_eq!(path, dir.path().join("9.png"));
            }
            _ => unreachable!("missing tile should be a tile load error"),
        }
    }
}
