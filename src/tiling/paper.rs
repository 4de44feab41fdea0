//! Standard paper sizes and their printable areas

use std::fmt;

use crate::geometry::dimensions::Unit;
use crate::io::error::{Result, invalid_parameter};
use crate::tiling::layout::PageSpec;

/// Common printer paper, portrait orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaperSize {
    /// ISO A4, 210 x 297 mm
    #[default]
    A4,
    /// ISO A3, 297 x 420 mm
    A3,
    /// US Letter, 8.5 x 11 in
    Letter,
    /// US Legal, 8.5 x 14 in
    Legal,
}

impl PaperSize {
    /// Sheet size as (width, height) in millimetres
    pub const fn size_mm(self) -> (f64, f64) {
        match self {
            Self::A4 => (210.0, 297.0),
            Self::A3 => (297.0, 420.0),
            Self::Letter => (215.9, 279.4),
            Self::Legal => (215.9, 355.6),
        }
    }

    /// Printable area in `unit` after removing `margin_mm` from every side
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the margin is negative or leaves no printable area
    pub fn printable(self, unit: Unit, margin_mm: f64) -> Result<PageSpec> {
        let (width_mm, height_mm) = self.size_mm();

        if !(margin_mm >= 0.0 && 2.0 * margin_mm < width_mm.min(height_mm)) {
            return Err(invalid_parameter(
                "margin_mm",
                &margin_mm,
                &format!("must be non-negative and leave printable area on {self}"),
            ));
        }

        let scale = unit.millimeters_per_unit();
        PageSpec::new(
            2.0f64.mul_add(-margin_mm, width_mm) / scale,
            2.0f64.mul_add(-margin_mm, height_mm) / scale,
        )
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A4 => "A4",
            Self::A3 => "A3",
            Self::Letter => "Letter",
            Self::Legal => "Legal",
        };
        f.write_str(name)
    }
}
