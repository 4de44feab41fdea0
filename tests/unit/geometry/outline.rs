//! Tests for points, bounding boxes and outline accessors

#[cfg(test)]
mod tests {
    use shadecut::geometry::outline::{BoundingBox, PathCommand, PatternOutline, Point};
    use shadecut::geometry::{ShadeDimensions, Unit, compute};
    use std::f64::consts::FRAC_PI_2;

    // Tests polar construction and distance
    // Verified by swapping sine and cosine
    #[test]
    fn test_point_polar_and_distance() {
        let p = Point::from_polar(2.0, FRAC_PI_2);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 2.0).abs() < 1e-12);

        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < f64::EPSILON);
    }

    // Tests enclosing box over a point set and the empty case
    // Verified by seeding the extremes with zero instead of the first point
    #[test]
    fn test_bounding_box_enclosing() {
        assert!(BoundingBox::enclosing(Vec::new()).is_none());

        let bounds = BoundingBox::enclosing([
            Point::new(2.0, 3.0),
            Point::new(5.0, -1.0),
            Point::new(4.0, 7.0),
        ])
        .expect("non-empty point set");

        assert!((bounds.min_x - 2.0).abs() < f64::EPSILON);
        assert!((bounds.min_y + 1.0).abs() < f64::EPSILON);
        assert!((bounds.width - 3.0).abs() < f64::EPSILON);
        assert!((bounds.height - 8.0).abs() < f64::EPSILON);
        assert!((bounds.max_x() - 5.0).abs() < f64::EPSILON);
        assert!((bounds.max_y() - 7.0).abs() < f64::EPSILON);
    }

    // Tests containment honours the tolerance
    // Verified by ignoring the tolerance argument
    #[test]
    fn test_bounding_box_contains() {
        let bounds = BoundingBox {
            min_x: 0.0,
            min_y: 0.0,
            width: 10.0,
            height: 5.0,
        };

        assert!(bounds.contains(Point::new(10.0, 5.0), 0.0));
        assert!(!bounds.contains(Point::new(10.5, 2.0), 0.0));
        assert!(bounds.contains(Point::new(10.5, 2.0), 1.0));
        assert!(!bounds.contains(Point::new(-0.1, 2.0), 0.0));
    }

    // Tests drum outline is drawn as a closed rectangle
    // Verified by omitting the closing command
    #[test]
    fn test_cylinder_path_commands() {
        let outline = compute(&ShadeDimensions::cylinder(10.0, 4.0, Unit::Centimeters))
            .expect("drum should unroll");
        let commands = outline.path_commands();

        assert_eq!(commands.len(), 5);
        assert_eq!(commands.first(), Some(&PathCommand::MoveTo(Point::new(0.0, 0.0))));
        assert_eq!(
            commands.get(2),
            Some(&PathCommand::LineTo(Point::new(outline.width(), 4.0)))
        );
        assert_eq!(commands.last(), Some(&PathCommand::ClosePath));
        assert!(
            !commands
                .iter()
                .any(|command| matches!(command, PathCommand::ArcTo { .. }))
        );
    }

    // Tests shared accessors agree with the variant data
    // Verified by returning the sector angle as width
    #[test]
    fn test_outline_accessors() {
        let dims = ShadeDimensions::frustum(20.0, 30.0, 20.0, Unit::Centimeters);
        let outline = compute(&dims).expect("taper should unroll");

        let PatternOutline::Frustum(pattern) = &outline else {
            unreachable!("Expected a frustum pattern");
        };
        assert_eq!(outline.bounding_box(), pattern.bounding_box());
        assert!((outline.width() - pattern.bounding_box().width).abs() < f64::EPSILON);
        assert!((outline.height() - pattern.bounding_box().height).abs() < f64::EPSILON);
        assert_eq!(outline.dimensions(), &dims);
    }
}
