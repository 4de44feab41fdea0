//! Flat pattern outlines produced by unrolling a shade
//!
//! Each shape class has its own variant so a renderer can only read the
//! quantities that exist for that shape. Coordinates live in the outline's own
//! frame: the rectangle starts at the origin, the sector has its apex there.

use crate::geometry::dimensions::ShadeDimensions;

/// Cartesian point in the outline frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point from Cartesian coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from the origin along polar `angle` (radians)
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: radius * cos,
            y: radius * sin,
        }
    }

    /// Euclidean distance to another point
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Tight axis-aligned box around an outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Smallest x coordinate
    pub min_x: f64,
    /// Smallest y coordinate
    pub min_y: f64,
    /// Extent along x
    pub width: f64,
    /// Extent along y
    pub height: f64,
}

impl BoundingBox {
    /// Smallest box containing every point, or `None` when there are no points
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);

        for point in points {
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }

        Some(Self {
            min_x,
            min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        })
    }

    /// Largest x coordinate
    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    /// Largest y coordinate
    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }

    /// Check whether a point lies inside or on the box, allowing `tolerance` slack
    pub fn contains(&self, point: Point, tolerance: f64) -> bool {
        point.x >= self.min_x - tolerance
            && point.x <= self.max_x() + tolerance
            && point.y >= self.min_y - tolerance
            && point.y <= self.max_y() + tolerance
    }
}

/// One step of a vector drawing of the outline
///
/// Arc flags follow the SVG elliptical-arc convention with equal radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath
    MoveTo(Point),
    /// Straight segment to a point
    LineTo(Point),
    /// Circular arc to a point
    ArcTo {
        /// Arc radius
        radius: f64,
        /// Whether the arc spans more than half a turn
        large_arc: bool,
        /// Whether the arc runs in the positive-angle direction
        sweep: bool,
        /// Arc end point
        end: Point,
    },
    /// Close the current subpath back to its start
    ClosePath,
}

/// Unrolled drum shade: a plain rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderPattern {
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) bounding_box: BoundingBox,
    pub(crate) dimensions: ShadeDimensions,
}

impl CylinderPattern {
    /// Rectangle width, equal to the shade circumference
    pub const fn circumference(&self) -> f64 {
        self.width
    }

    /// Rectangle height, equal to the vertical shade height
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Bounding box, the rectangle itself
    pub const fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }
}

/// Unrolled tapered shade: an annular sector with its apex at the origin
#[derive(Debug, Clone, PartialEq)]
pub struct FrustumPattern {
    pub(crate) slant_height: f64,
    pub(crate) inner_radius: f64,
    pub(crate) outer_radius: f64,
    pub(crate) sector_angle: f64,
    pub(crate) top_arc_length: f64,
    pub(crate) bottom_arc_length: f64,
    pub(crate) boundary: Vec<PathCommand>,
    pub(crate) bounding_box: BoundingBox,
    pub(crate) dimensions: ShadeDimensions,
}

impl FrustumPattern {
    /// Length of the shade's lateral edge
    pub const fn slant_height(&self) -> f64 {
        self.slant_height
    }

    /// Distance from the apex to the top (inner) arc
    pub const fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Distance from the apex to the bottom (outer) arc
    pub const fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Angle subtended by the sector, in radians
    pub const fn sector_angle(&self) -> f64 {
        self.sector_angle
    }

    /// Length of the inner arc, equal to the top ring circumference
    pub const fn top_arc_length(&self) -> f64 {
        self.top_arc_length
    }

    /// Length of the outer arc, equal to the bottom ring circumference
    pub const fn bottom_arc_length(&self) -> f64 {
        self.bottom_arc_length
    }

    /// Whether the arcs must be drawn with the large-arc flag
    pub fn is_large_arc(&self) -> bool {
        self.sector_angle > std::f64::consts::PI
    }

    /// Closed boundary: two radial edges joined by the outer and inner arcs
    pub fn boundary(&self) -> &[PathCommand] {
        &self.boundary
    }

    /// Tight bounding box of the sector, apex at the origin
    pub const fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }
}

/// Flat pattern for one shade, tagged by shape
#[derive(Debug, Clone, PartialEq)]
pub enum PatternOutline {
    /// Rectangle for a drum shade
    Cylinder(CylinderPattern),
    /// Annular sector for a tapered shade
    Frustum(FrustumPattern),
}

impl PatternOutline {
    /// Tight bounding box of the outline in its own frame
    pub const fn bounding_box(&self) -> &BoundingBox {
        match self {
            Self::Cylinder(pattern) => &pattern.bounding_box,
            Self::Frustum(pattern) => &pattern.bounding_box,
        }
    }

    /// Measurements the outline was computed from
    pub const fn dimensions(&self) -> &ShadeDimensions {
        match self {
            Self::Cylinder(pattern) => &pattern.dimensions,
            Self::Frustum(pattern) => &pattern.dimensions,
        }
    }

    /// Width of the bounding box
    pub const fn width(&self) -> f64 {
        self.bounding_box().width
    }

    /// Height of the bounding box
    pub const fn height(&self) -> f64 {
        self.bounding_box().height
    }

    /// Drawing commands tracing the closed outline
    pub fn path_commands(&self) -> Vec<PathCommand> {
        match self {
            Self::Cylinder(pattern) => vec![
                PathCommand::MoveTo(Point::new(0.0, 0.0)),
                PathCommand::LineTo(Point::new(pattern.width, 0.0)),
                PathCommand::LineTo(Point::new(pattern.width, pattern.height)),
                PathCommand::LineTo(Point::new(0.0, pattern.height)),
                PathCommand::ClosePath,
            ],
            Self::Frustum(pattern) => pattern.boundary.clone(),
        }
    }
}
