//! Pattern geometry: shade measurements in, flat outline out
//!
//! This module contains:
//! - Shade measurements and shape classes
//! - Outline types with their bounding boxes and drawing commands
//! - The unrolling calculator
//! - Boundary distance queries for rasterisation

/// Unrolling of drum and tapered shades into flat outlines
pub mod calculator;
/// Shade measurements, units and shape classes
pub mod dimensions;
/// Point-to-boundary distance for outlines
pub mod distance;
/// Outline, bounding box and drawing command types
pub mod outline;

pub use calculator::compute;
pub use dimensions::{ShadeDimensions, ShapeClass, Unit};
pub use distance::distance_to_boundary;
pub use outline::{BoundingBox, PathCommand, PatternOutline, Point};
