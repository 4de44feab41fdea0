//! Lampshade frame measurements and the shape they describe

use std::fmt;

use crate::io::error::{Result, ensure_positive};

/// Length unit the measurements were taken in
///
/// The geometry never converts between units; the unit only matters when a
/// pattern meets physical paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    /// Millimetres
    Millimeters,
    /// Centimetres
    #[default]
    Centimeters,
    /// Inches
    Inches,
}

impl Unit {
    /// Number of millimetres in one unit
    pub const fn millimeters_per_unit(self) -> f64 {
        match self {
            Self::Millimeters => 1.0,
            Self::Centimeters => 10.0,
            Self::Inches => 25.4,
        }
    }

    /// Short suffix used when printing lengths
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Centimeters => "cm",
            Self::Inches => "in",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Which surface the shade's side panel forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeClass {
    /// Straight-sided drum; top and bottom diameters are equal
    Cylinder,
    /// Tapered cone or empire shade narrowing toward the top
    Frustum,
}

/// Immutable measurements of a lampshade frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadeDimensions {
    /// Diameter of the top ring
    pub top_diameter: f64,
    /// Diameter of the bottom ring
    pub bottom_diameter: f64,
    /// Vertical distance between the rings (not the slant)
    pub height: f64,
    /// Unit all lengths are expressed in
    pub unit: Unit,
    /// Shape class selecting the unrolling
    pub shape: ShapeClass,
}

impl ShadeDimensions {
    /// Drum shade with a single diameter
    pub const fn cylinder(diameter: f64, height: f64, unit: Unit) -> Self {
        Self {
            top_diameter: diameter,
            bottom_diameter: diameter,
            height,
            unit,
            shape: ShapeClass::Cylinder,
        }
    }

    /// Tapered shade; validity of the taper is checked when the pattern is computed
    pub const fn frustum(top_diameter: f64, bottom_diameter: f64, height: f64, unit: Unit) -> Self {
        Self {
            top_diameter,
            bottom_diameter,
            height,
            unit,
            shape: ShapeClass::Frustum,
        }
    }

    /// Pick the shape class from the diameters: equal means drum, anything else a taper
    #[allow(clippy::float_cmp)]
    pub fn from_diameters(top_diameter: f64, bottom_diameter: f64, height: f64, unit: Unit) -> Self {
        if top_diameter == bottom_diameter {
            Self::cylinder(top_diameter, height, unit)
        } else {
            Self::frustum(top_diameter, bottom_diameter, height, unit)
        }
    }

    /// Check every length is a finite positive number
    ///
    /// The pattern calculator assumes this has already happened and only checks the taper.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first offending measurement
    pub fn validate(&self) -> Result<()> {
        ensure_positive("top_diameter", self.top_diameter)?;
        ensure_positive("bottom_diameter", self.bottom_diameter)?;
        ensure_positive("height", self.height)?;
        Ok(())
    }
}
