//! Tests for placement rectangle derivation

#[cfg(test)]
mod tests {
    use gridstitch::spatial::placement::Placement;
    use ndarray::Array3;

    // Tests the bottom-right corner derives from the pixel block dimensions
    // Verified by swapping the row and column extents
    #[test]
    fn test_bottom_right_derived_from_pixels() {
        let pixels = Array3::<u8>::zeros((27, 32, 3));
        let placement = Placement::new([54, 96], pixels);

        assert_eq!(placement.top_left, [54, 96]);
        assert_eq!(placement.bottom_right, [81, 128]);
        assert_eq!(placement.height(), 27);
        assert_eq!(placement.width(), 32);
    }

    // Tests bounds checks against canvases of varying sizes
    // Verified by making the bottom-right comparison exclusive
    #[test]
    fn test_fits_within_canvas() {
        let pixels = Array3::<u8>::zeros((4, 6, 3));
        let placement = Placement::new([10, 20], pixels);

        assert!(placement.fits_within(14, 26));
        assert!(placement.fits_within(100, 100));
        assert!(!placement.fits_within(13, 26));
        assert!(!placement.fits_within(14, 25));
    }

    // Tests a placement at the origin spans exactly the pixel block
    #[test]
    fn test_origin_placement() {
        let pixels = Array3::<u8>::zeros((2, 3, 3));
        let placement = Placement::new([0, 0], pixels);

        assert_eq!(placement.bottom_right, [2, 3]);
        assert!(placement.fits_within(2, 3));
    }
}
