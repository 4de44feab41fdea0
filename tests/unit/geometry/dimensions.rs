//! Tests for shade measurements, unit conversion factors and validation

#[cfg(test)]
mod tests {
    use shadecut::PatternError;
    use shadecut::geometry::dimensions::{ShadeDimensions, ShapeClass, Unit};

    // Tests equal diameters choose the drum and unequal ones the taper
    // Verified by always returning a frustum
    #[test]
    fn test_from_diameters_dispatches_on_equality() {
        let drum = ShadeDimensions::from_diameters(25.0, 25.0, 18.0, Unit::Centimeters);
        assert_eq!(drum.shape, ShapeClass::Cylinder);

        let taper = ShadeDimensions::from_diameters(15.0, 25.0, 18.0, Unit::Centimeters);
        assert_eq!(taper.shape, ShapeClass::Frustum);
        assert_eq!(taper.top_diameter.to_bits(), 15.0_f64.to_bits());
        assert_eq!(taper.bottom_diameter.to_bits(), 25.0_f64.to_bits());

        // Inverted diameters still become a frustum and fail later as a bad taper
        let inverted = ShadeDimensions::from_diameters(25.0, 15.0, 18.0, Unit::Centimeters);
        assert_eq!(inverted.shape, ShapeClass::Frustum);
    }

    // Tests drum constructor collapses both diameters
    // Verified by leaving the top diameter at zero
    #[test]
    fn test_cylinder_constructor_collapses_diameters() {
        let drum = ShadeDimensions::cylinder(40.0, 30.0, Unit::Millimeters);
        assert_eq!(drum.top_diameter.to_bits(), drum.bottom_diameter.to_bits());
        assert_eq!(drum.unit, Unit::Millimeters);
    }

    // Tests validation rejects zero, negative and non-finite lengths
    // Verified by accepting zero height
    #[test]
    fn test_validate_rejects_non_positive_lengths() {
        assert!(
            ShadeDimensions::frustum(10.0, 20.0, 15.0, Unit::Inches)
                .validate()
                .is_ok()
        );

        let cases = [
            (ShadeDimensions::frustum(0.0, 20.0, 15.0, Unit::Inches), "top_diameter"),
            (ShadeDimensions::frustum(10.0, -2.0, 15.0, Unit::Inches), "bottom_diameter"),
            (ShadeDimensions::cylinder(10.0, 0.0, Unit::Inches), "height"),
            (ShadeDimensions::cylinder(10.0, f64::NAN, Unit::Inches), "height"),
            (ShadeDimensions::cylinder(f64::INFINITY, 5.0, Unit::Inches), "top_diameter"),
        ];

        for (dims, expected) in cases {
            match dims.validate() {
                Err(PatternError::InvalidParameter { parameter, .. }) => {
                    assert_eq!(parameter, expected);
                }
                other => unreachable!("Expected InvalidParameter for {dims:?}, got {other:?}"),
            }
        }
    }

    // Tests unit conversion factors and suffixes
    // Verified by using 2.54 for inches
    #[test]
    fn test_unit_factors_and_display() {
        assert!((Unit::Millimeters.millimeters_per_unit() - 1.0).abs() < f64::EPSILON);
        assert!((Unit::Centimeters.millimeters_per_unit() - 10.0).abs() < f64::EPSILON);
        assert!((Unit::Inches.millimeters_per_unit() - 25.4).abs() < f64::EPSILON);

        assert_eq!(Unit::Centimeters.to_string(), "cm");
        assert_eq!(Unit::Inches.suffix(), "in");
        assert_eq!(Unit::default(), Unit::Centimeters);
    }
}
