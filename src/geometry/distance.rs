//! Distance from a point to the nearest part of an outline's boundary
//!
//! Used when rasterising pages: a pixel is inked when it lies within half a
//! stroke width of the boundary, which keeps the line weight constant.

use crate::geometry::outline::{FrustumPattern, PatternOutline, Point};

/// Shortest distance from `point` to the outline boundary, in outline units
pub fn distance_to_boundary(outline: &PatternOutline, point: Point) -> f64 {
    match outline {
        PatternOutline::Cylinder(pattern) => {
            let corners = [
                Point::new(0.0, 0.0),
                Point::new(pattern.width, 0.0),
                Point::new(pattern.width, pattern.height),
                Point::new(0.0, pattern.height),
            ];
            polygon_distance(&corners, point)
        }
        PatternOutline::Frustum(pattern) => sector_distance(pattern, point),
    }
}

fn polygon_distance(corners: &[Point], point: Point) -> f64 {
    corners
        .iter()
        .zip(corners.iter().cycle().skip(1))
        .map(|(&start, &end)| segment_distance(start, end, point))
        .fold(f64::INFINITY, f64::min)
}

fn sector_distance(pattern: &FrustumPattern, point: Point) -> f64 {
    let half = pattern.sector_angle / 2.0;

    let lower_edge = segment_distance(
        Point::from_polar(pattern.inner_radius, -half),
        Point::from_polar(pattern.outer_radius, -half),
        point,
    );
    let upper_edge = segment_distance(
        Point::from_polar(pattern.inner_radius, half),
        Point::from_polar(pattern.outer_radius, half),
        point,
    );
    let outer_arc = arc_distance(pattern.outer_radius, half, point);
    let inner_arc = arc_distance(pattern.inner_radius, half, point);

    lower_edge.min(upper_edge).min(outer_arc).min(inner_arc)
}

/// Distance to the arc of `radius` about the origin spanning `[-half, half]`
fn arc_distance(radius: f64, half: f64, point: Point) -> f64 {
    let angle = point.y.atan2(point.x);

    if angle.abs() <= half {
        (point.x.hypot(point.y) - radius).abs()
    } else {
        let start = Point::from_polar(radius, -half);
        let end = Point::from_polar(radius, half);
        point.distance_to(start).min(point.distance_to(end))
    }
}

fn segment_distance(start: Point, end: Point, point: Point) -> f64 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let length_squared = dx.mul_add(dx, dy * dy);

    if length_squared <= 0.0 {
        return point.distance_to(start);
    }

    let t = ((point.x - start.x).mul_add(dx, (point.y - start.y) * dy) / length_squared)
        .clamp(0.0, 1.0);
    let projected = Point::new(t.mul_add(dx, start.x), t.mul_add(dy, start.y));
    point.distance_to(projected)
}
