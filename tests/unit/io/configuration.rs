//! Tests for default limits and export settings

#[cfg(test)]
mod tests {
    use shadecut::io::configuration::{
        DEFAULT_MARGIN_MM, DEFAULT_MAX_TILES, DEFAULT_PIXELS_PER_MM, JOIN_MARK_LENGTH_PX,
        JOIN_MARK_THICKNESS_PX, MAX_PAGE_PIXELS, MAX_TILES_LIMIT, OUTLINE_STROKE_PX,
        OUTPUT_SUFFIX, PAGE_FILE_PREFIX,
    };

    // Tests the default page ceiling
    // Verified by changing the ceiling
    #[test]
    fn test_default_max_tiles() {
        assert_eq!(DEFAULT_MAX_TILES, 50);
        assert!(DEFAULT_MAX_TILES as u64 <= MAX_TILES_LIMIT);
    }

    // Tests default margin leaves A4 printable in both directions
    // Verified by setting a margin wider than half the sheet
    #[test]
    fn test_default_margin_is_reasonable() {
        assert!(DEFAULT_MARGIN_MM >= 0.0);
        assert!(DEFAULT_MARGIN_MM * 2.0 < 210.0);
    }

    // Tests raster settings stay sensible
    // Verified by making the stroke thicker than a join mark
    #[test]
    fn test_raster_settings() {
        assert!(DEFAULT_PIXELS_PER_MM > 0.0);
        assert!(OUTLINE_STROKE_PX > 0.0);
        assert!(OUTLINE_STROKE_PX < f64::from(JOIN_MARK_THICKNESS_PX));
        assert!(JOIN_MARK_THICKNESS_PX < JOIN_MARK_LENGTH_PX);
        assert!(MAX_PAGE_PIXELS >= JOIN_MARK_LENGTH_PX);
    }

    // Tests filesystem safety of output names
    // Verified by adding a path separator to the suffix
    #[test]
    fn test_output_names_are_filesystem_safe() {
        assert!(OUTPUT_SUFFIX.starts_with('_'));
        for ch in OUTPUT_SUFFIX.chars().chain(PAGE_FILE_PREFIX.chars()) {
            assert!(
                ch.is_alphanumeric() || ch == '_' || ch == '-',
                "Output name contains invalid character: {ch}"
            );
        }
    }
}
