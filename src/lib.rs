//! Flat sewing patterns for lampshades, tiled onto printable pages
//!
//! A drum shade unrolls to a rectangle and a tapered shade to a ring sector.
//! The outline is then split into a grid of pages with join marks so the
//! printed sheets can be taped back together.

#![forbid(unsafe_code)]

/// Shade measurements and pattern outline computation
pub mod geometry;
/// Command-line surface, configuration, errors and file export
pub mod io;
/// Page grid layout of oversized patterns
pub mod tiling;

pub use geometry::{PatternOutline, ShadeDimensions, ShapeClass, Unit, compute};
pub use io::error::{PatternError, Result};
pub use tiling::{PageLayout, PageSpec, TilingConfig, tile};
