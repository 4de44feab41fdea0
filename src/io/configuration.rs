//! Tiling limits, page defaults and export settings

// Safety limit so a mistyped dimension cannot request hundreds of pages
/// Default maximum number of pages a layout may span
pub const DEFAULT_MAX_TILES: usize = 50;
/// Largest page ceiling the command line accepts
pub const MAX_TILES_LIMIT: u64 = 10_000;

/// Default unprintable border on every side of the sheet, in millimetres
pub const DEFAULT_MARGIN_MM: f64 = 5.0;

// Page raster settings
/// Default raster resolution for page export (4 px/mm is roughly 100 dpi)
pub const DEFAULT_PIXELS_PER_MM: f64 = 4.0;
/// Width of the pattern outline stroke in pixels
pub const OUTLINE_STROKE_PX: f64 = 2.0;
/// Length of a join mark bar along the page edge in pixels
pub const JOIN_MARK_LENGTH_PX: u32 = 60;
/// Thickness of a join mark bar in pixels
pub const JOIN_MARK_THICKNESS_PX: u32 = 6;
/// Largest page raster accepted for export, in pixels per side
pub const MAX_PAGE_PIXELS: u32 = 20_000;

// Progress bar display settings
/// Width of the page export progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Colours
/// Page background colour
pub const PAGE_BACKGROUND: [u8; 4] = [255, 255, 255, 255];
/// Pattern outline colour
pub const OUTLINE_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Join mark colour
pub const JOIN_MARK_COLOR: [u8; 4] = [220, 40, 40, 255];

// Output settings
/// Suffix added to the vector outline file stem
pub const OUTPUT_SUFFIX: &str = "_pattern";
/// Prefix of every exported page image
pub const PAGE_FILE_PREFIX: &str = "page";

// Page labels
/// Size of one font cell of label lettering, in pixels
pub const LABEL_SCALE_PX: u32 = 2;
/// Distance of the page label from the top-left corner, in pixels
pub const LABEL_INSET_PX: u32 = 8;
/// Space between a join mark bar and its page number, in pixels
pub const LABEL_GAP_PX: u32 = 4;
/// Label lettering colour
pub const LABEL_COLOR: [u8; 4] = [40, 40, 200, 255];
