//! Page tiling of oversized patterns
//!
//! This module contains:
//! - The fixed raster page grid with offsets and join marks
//! - Standard paper sizes and printable-area calculation

/// Page grid layout and join marks
pub mod layout;
/// Paper size presets
pub mod paper;

pub use layout::{Edge, JoinMark, PageLayout, PageSpec, PageTile, TilingConfig, tile, tile_bounds};
pub use paper::PaperSize;
