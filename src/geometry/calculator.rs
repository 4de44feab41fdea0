//! Developable-surface unrolling of drum and tapered shades
//!
//! A drum unrolls to a rectangle as wide as its circumference. A tapered shade
//! is the side of a cone frustum; extending the slant edge to the cone apex
//! shows it unrolls to a ring sector whose arcs are the top and bottom rings.

use std::cmp::Ordering;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::geometry::dimensions::{ShadeDimensions, ShapeClass};
use crate::geometry::outline::{
    BoundingBox, CylinderPattern, FrustumPattern, PathCommand, PatternOutline, Point,
};
use crate::io::error::{PatternError, Result};

/// Compute the flat pattern for a shade
///
/// Only the geometric constraints are checked here; lengths are expected to be
/// positive already (see [`ShadeDimensions::validate`]).
///
/// # Errors
///
/// Returns an error if:
/// - a frustum is requested whose bottom diameter is not strictly larger than its top
/// - the unrolled sector would exceed a full turn
pub fn compute(dimensions: &ShadeDimensions) -> Result<PatternOutline> {
    let outline = match dimensions.shape {
        ShapeClass::Cylinder => PatternOutline::Cylinder(unroll_cylinder(dimensions)),
        ShapeClass::Frustum => PatternOutline::Frustum(unroll_frustum(dimensions)?),
    };

    log::debug!(
        "computed {:?} pattern {:.3} x {:.3} {}",
        dimensions.shape,
        outline.width(),
        outline.height(),
        dimensions.unit
    );

    Ok(outline)
}

/// Accept a sector angle only if it fits in one seamless panel
///
/// NaN is rejected along with angles beyond a full turn. A taper with finite
/// positive measurements never trips it: the angle is `2π(r_bottom - r_top) / slant`
/// and the slant is never shorter than the radius step.
///
/// # Errors
///
/// Returns `AngleOverflow` when `sector_angle` is not at most `2π`
pub fn ensure_single_panel(sector_angle: f64) -> Result<f64> {
    if sector_angle <= TAU {
        Ok(sector_angle)
    } else {
        Err(PatternError::AngleOverflow { sector_angle })
    }
}

fn unroll_cylinder(dimensions: &ShadeDimensions) -> CylinderPattern {
    // The caller collapses drum diameters, so either ring will do
    let width = PI * dimensions.bottom_diameter;
    let height = dimensions.height;

    CylinderPattern {
        width,
        height,
        bounding_box: BoundingBox {
            min_x: 0.0,
            min_y: 0.0,
            width,
            height,
        },
        dimensions: *dimensions,
    }
}

fn unroll_frustum(dimensions: &ShadeDimensions) -> Result<FrustumPattern> {
    let top_diameter = dimensions.top_diameter;
    let bottom_diameter = dimensions.bottom_diameter;

    // NaN diameters compare as unordered and are refused with the rest
    if top_diameter.partial_cmp(&bottom_diameter) != Some(Ordering::Less) {
        return Err(PatternError::InvalidTaper {
            top_diameter,
            bottom_diameter,
        });
    }

    let r_top = top_diameter / 2.0;
    let r_bottom = bottom_diameter / 2.0;
    let radius_step = r_bottom - r_top;

    let slant_height = dimensions.height.hypot(radius_step);

    // Similar triangles from the apex down the slant edge
    let outer_radius = slant_height * r_bottom / radius_step;
    let inner_radius = slant_height * r_top / radius_step;

    // Outer arc length must equal the bottom ring circumference
    let sector_angle = ensure_single_panel(TAU * r_bottom / outer_radius)?;

    let boundary = sector_boundary(inner_radius, outer_radius, sector_angle);
    let bounding_box = sector_bounding_box(inner_radius, outer_radius, sector_angle);

    Ok(FrustumPattern {
        slant_height,
        inner_radius,
        outer_radius,
        sector_angle,
        top_arc_length: PI * top_diameter,
        bottom_arc_length: PI * bottom_diameter,
        boundary,
        bounding_box,
        dimensions: *dimensions,
    })
}

/// Closed boundary symmetric about the +x axis
///
/// Runs out along the lower radial edge, sweeps the outer arc counter-clockwise,
/// comes back along the upper edge and returns clockwise along the inner arc.
fn sector_boundary(inner_radius: f64, outer_radius: f64, sector_angle: f64) -> Vec<PathCommand> {
    let half = sector_angle / 2.0;
    let large_arc = sector_angle > PI;

    vec![
        PathCommand::MoveTo(Point::from_polar(inner_radius, -half)),
        PathCommand::LineTo(Point::from_polar(outer_radius, -half)),
        PathCommand::ArcTo {
            radius: outer_radius,
            large_arc,
            sweep: true,
            end: Point::from_polar(outer_radius, half),
        },
        PathCommand::LineTo(Point::from_polar(inner_radius, half)),
        PathCommand::ArcTo {
            radius: inner_radius,
            large_arc,
            sweep: false,
            end: Point::from_polar(inner_radius, -half),
        },
        PathCommand::ClosePath,
    ]
}

/// Tight box around the sector
///
/// The four corners bound the radial edges. The outer arc can bulge past them
/// wherever it crosses an axis inside the sweep: at angle 0 for any sector,
/// at ±π/2 once the sector passes a half turn, at π only for a full turn.
/// The inner arc never reaches beyond the outer one or the inner corners.
fn sector_bounding_box(inner_radius: f64, outer_radius: f64, sector_angle: f64) -> BoundingBox {
    let half = sector_angle / 2.0;

    let corners = [
        Point::from_polar(inner_radius, -half),
        Point::from_polar(outer_radius, -half),
        Point::from_polar(outer_radius, half),
        Point::from_polar(inner_radius, half),
    ];

    let bulges = [
        (0.0, Point::new(outer_radius, 0.0)),
        (FRAC_PI_2, Point::new(0.0, outer_radius)),
        (FRAC_PI_2, Point::new(0.0, -outer_radius)),
        (PI, Point::new(-outer_radius, 0.0)),
    ]
    .into_iter()
    .filter(|(angle, _)| *angle <= half)
    .map(|(_, point)| point);

    BoundingBox::enclosing(corners.into_iter().chain(bulges)).unwrap_or(BoundingBox {
        min_x: 0.0,
        min_y: 0.0,
        width: 0.0,
        height: 0.0,
    })
}
