//! Raster page grid over an oversized pattern
//!
//! Pages are laid edge to edge with no overlap. Every page records the
//! translation that brings its window of the pattern to the page origin, plus
//! a join mark for each neighbouring page so printed sheets can be taped
//! back together in the right order.

use crate::geometry::outline::{BoundingBox, PatternOutline};
use crate::io::configuration::DEFAULT_MAX_TILES;
use crate::io::error::{PatternError, Result, ensure_positive};

/// Printable area of one sheet, in outline units, margins already removed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSpec {
    printable_width: f64,
    printable_height: f64,
}

impl PageSpec {
    /// Create a page spec from its printable area
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either side is not a finite positive length
    pub fn new(printable_width: f64, printable_height: f64) -> Result<Self> {
        Ok(Self {
            printable_width: ensure_positive("printable_width", printable_width)?,
            printable_height: ensure_positive("printable_height", printable_height)?,
        })
    }

    /// Printable width
    pub const fn printable_width(&self) -> f64 {
        self.printable_width
    }

    /// Printable height
    pub const fn printable_height(&self) -> f64 {
        self.printable_height
    }
}

/// Runtime limits for tiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilingConfig {
    /// Largest number of pages a layout may use
    pub max_tiles: usize,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            max_tiles: DEFAULT_MAX_TILES,
        }
    }
}

/// Side of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Upper edge
    Top,
    /// Lower edge
    Bottom,
    /// Left edge
    Left,
    /// Right edge
    Right,
}

impl Edge {
    /// The edge a neighbour joins back with
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Annotation telling which page an edge must be aligned with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JoinMark {
    /// Edge of this page carrying the mark
    pub edge: Edge,
    /// Row of the neighbouring page
    pub target_row: usize,
    /// Column of the neighbouring page
    pub target_col: usize,
}

impl JoinMark {
    /// Page number of the neighbour, numbered like [`PageTile::page_number`]
    pub const fn target_page(&self, columns: usize) -> usize {
        self.target_row * columns + self.target_col + 1
    }
}

/// One printable page of the layout
#[derive(Debug, Clone, PartialEq)]
pub struct PageTile {
    /// Grid row, counted from the top
    pub row: usize,
    /// Grid column, counted from the left
    pub col: usize,
    /// Horizontal translation applied to the pattern on this page
    pub offset_x: f64,
    /// Vertical translation applied to the pattern on this page
    pub offset_y: f64,
    /// Join marks for every neighbour in the grid
    pub joins: Vec<JoinMark>,
}

impl PageTile {
    /// One-based row-major page number, as printed in "page N of M"
    pub const fn page_number(&self, columns: usize) -> usize {
        self.row * columns + self.col + 1
    }

    /// Join mark on the given edge, if this page has a neighbour there
    pub fn join_on(&self, edge: Edge) -> Option<&JoinMark> {
        self.joins.iter().find(|mark| mark.edge == edge)
    }
}

/// Grid of pages covering a pattern
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    columns: usize,
    rows: usize,
    page: PageSpec,
    tiles: Vec<PageTile>,
}

impl PageLayout {
    /// Number of page columns
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of page rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Page size the layout was computed for
    pub const fn page(&self) -> &PageSpec {
        &self.page
    }

    /// Pages in row-major order
    pub fn tiles(&self) -> &[PageTile] {
        &self.tiles
    }

    /// Total number of pages
    pub const fn page_count(&self) -> usize {
        self.tiles.len()
    }

    /// Page at a grid position
    pub fn tile_at(&self, row: usize, col: usize) -> Option<&PageTile> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.tiles.get(row * self.columns + col)
    }
}

/// Lay a pattern out over printable pages
///
/// # Errors
///
/// Returns `PatternTooLarge` if covering the pattern needs more pages than
/// `config.max_tiles`
pub fn tile(outline: &PatternOutline, page: &PageSpec, config: &TilingConfig) -> Result<PageLayout> {
    tile_bounds(outline.bounding_box(), page, config)
}

/// Lay a bounding box out over printable pages
///
/// The tiler only needs the extent of the pattern, never its shape.
///
/// # Errors
///
/// Returns `PatternTooLarge` if covering the box needs more pages than
/// `config.max_tiles`
pub fn tile_bounds(
    bounds: &BoundingBox,
    page: &PageSpec,
    config: &TilingConfig,
) -> Result<PageLayout> {
    let columns = pages_along(bounds.width, page.printable_width);
    let rows = pages_along(bounds.height, page.printable_height);

    let required = rows.saturating_mul(columns);
    if required > config.max_tiles {
        return Err(PatternError::PatternTooLarge {
            required,
            limit: config.max_tiles,
        });
    }

    let mut tiles = Vec::with_capacity(required);
    for row in 0..rows {
        for col in 0..columns {
            tiles.push(PageTile {
                row,
                col,
                offset_x: -(col as f64) * page.printable_width,
                offset_y: -(row as f64) * page.printable_height,
                joins: join_marks(row, col, rows, columns),
            });
        }
    }

    log::debug!("tiled {:.3} x {:.3} onto {columns} x {rows} pages", bounds.width, bounds.height);

    Ok(PageLayout {
        columns,
        rows,
        page: *page,
        tiles,
    })
}

/// Pages needed to cover `extent`; at least one even for an empty extent
fn pages_along(extent: f64, page_extent: f64) -> usize {
    let pages = (extent / page_extent).ceil();
    if pages >= 1.0 { pages as usize } else { 1 }
}

fn join_marks(row: usize, col: usize, rows: usize, columns: usize) -> Vec<JoinMark> {
    let neighbours = [
        (Edge::Top, (row > 0).then(|| (row - 1, col))),
        (Edge::Bottom, (row + 1 < rows).then_some((row + 1, col))),
        (Edge::Left, (col > 0).then(|| (row, col - 1))),
        (Edge::Right, (col + 1 < columns).then_some((row, col + 1))),
    ];

    neighbours
        .into_iter()
        .filter_map(|(edge, target)| {
            target.map(|(target_row, target_col)| JoinMark {
                edge,
                target_row,
                target_col,
            })
        })
        .collect()
}
