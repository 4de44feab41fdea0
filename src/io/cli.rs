//! Command-line interface for computing a shade pattern and exporting its pages

use crate::geometry::calculator::compute;
use crate::geometry::dimensions::{ShadeDimensions, Unit};
use crate::geometry::outline::PatternOutline;
use crate::io::configuration::{
    DEFAULT_MARGIN_MM, DEFAULT_MAX_TILES, DEFAULT_PIXELS_PER_MM, MAX_TILES_LIMIT, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, ensure_positive, invalid_parameter};
use crate::io::image::export_pages;
use crate::io::logging::LoggingConfig;
use crate::io::progress::ExportProgress;
use crate::io::svg::export_outline_svg;
use crate::tiling::layout::{PageLayout, PageSpec, TilingConfig, tile};
use crate::tiling::paper::PaperSize;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Measurement unit accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    /// Millimetres
    Mm,
    /// Centimetres
    Cm,
    /// Inches
    In,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Mm => Self::Millimeters,
            UnitArg::Cm => Self::Centimeters,
            UnitArg::In => Self::Inches,
        }
    }
}

/// Shade shape accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    /// Drum when the diameters match, tapered otherwise
    Auto,
    /// Straight-sided drum
    Cylinder,
    /// Tapered cone or empire shade
    Frustum,
}

/// Paper size accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaperArg {
    /// ISO A4
    A4,
    /// ISO A3
    A3,
    /// US Letter
    Letter,
    /// US Legal
    Legal,
}

impl From<PaperArg> for PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A4 => Self::A4,
            PaperArg::A3 => Self::A3,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
        }
    }
}

#[derive(Parser)]
#[command(name = "shadecut")]
#[command(
    author,
    version,
    about = "Compute a flat lampshade pattern and tile it onto printable pages"
)]
/// Command-line arguments for the pattern tool
pub struct Cli {
    /// Diameter of the top ring
    #[arg(short, long, value_name = "DIAMETER")]
    pub top: f64,

    /// Diameter of the bottom ring (defaults to the top diameter)
    #[arg(short, long, value_name = "DIAMETER")]
    pub bottom: Option<f64>,

    /// Vertical height of the shade
    #[arg(short = 'H', long)]
    pub height: f64,

    /// Unit of all measurements
    #[arg(short, long, value_enum, default_value_t = UnitArg::Cm)]
    pub unit: UnitArg,

    /// Shape of the shade
    #[arg(short, long, value_enum, default_value_t = ShapeArg::Auto)]
    pub shape: ShapeArg,

    /// Paper the pages are printed on
    #[arg(short, long, value_enum, default_value_t = PaperArg::A4)]
    pub paper: PaperArg,

    /// Unprintable border on each side of the sheet, in millimetres
    #[arg(long, default_value_t = DEFAULT_MARGIN_MM)]
    pub margin_mm: f64,

    /// Maximum number of pages the pattern may span
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_MAX_TILES,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_TILES_LIMIT)
    )]
    pub max_tiles: usize,

    /// Write the full-size outline as SVG (a directory gets a default file name)
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,

    /// Write one PNG per page into this directory
    #[arg(long, value_name = "DIR")]
    pub pages: Option<PathBuf>,

    /// Page raster resolution
    #[arg(long, default_value_t = DEFAULT_PIXELS_PER_MM)]
    pub pixels_per_mm: f64,

    /// Suppress progress and informational output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Logger settings matching the verbosity flags
    pub fn logging_config(&self) -> LoggingConfig {
        if self.quiet {
            LoggingConfig::quiet()
        } else {
            LoggingConfig::default()
        }
    }

    /// Validated shade measurements
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a length is not positive or a drum is
    /// requested with two different diameters
    #[allow(clippy::float_cmp)]
    pub fn dimensions(&self) -> Result<ShadeDimensions> {
        let unit = Unit::from(self.unit);
        let bottom = self.bottom.unwrap_or(self.top);

        let dimensions = match self.shape {
            ShapeArg::Auto => ShadeDimensions::from_diameters(self.top, bottom, self.height, unit),
            ShapeArg::Cylinder if self.top == bottom => {
                ShadeDimensions::cylinder(self.top, self.height, unit)
            }
            ShapeArg::Cylinder => {
                return Err(invalid_parameter(
                    "bottom",
                    &bottom,
                    &format!("a cylinder needs equal diameters, top is {}", self.top),
                ));
            }
            ShapeArg::Frustum => ShadeDimensions::frustum(self.top, bottom, self.height, unit),
        };

        dimensions.validate()?;
        Ok(dimensions)
    }

    /// Printable page area in the measurement unit
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the margin leaves no printable area
    pub fn page_spec(&self) -> Result<PageSpec> {
        PaperSize::from(self.paper).printable(Unit::from(self.unit), self.margin_mm)
    }

    /// Tiling limits from the command line
    pub const fn tiling_config(&self) -> TilingConfig {
        TilingConfig {
            max_tiles: self.max_tiles,
        }
    }

    /// Raster resolution in pixels per measurement unit
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the resolution is not positive
    pub fn pixels_per_unit(&self) -> Result<f64> {
        let per_mm = ensure_positive("pixels_per_mm", self.pixels_per_mm)?;
        Ok(per_mm * Unit::from(self.unit).millimeters_per_unit())
    }

    /// Where the SVG outline goes, resolving a directory to a default file name
    pub fn svg_path(&self) -> Option<PathBuf> {
        self.svg.as_ref().map(|path| {
            if path.is_dir() {
                path.join(format!("shade{OUTPUT_SUFFIX}.svg"))
            } else {
                path.clone()
            }
        })
    }
}

/// Everything a run produced
#[derive(Debug)]
pub struct PatternReport {
    /// Computed outline
    pub outline: PatternOutline,
    /// Page layout, when the pattern fits within the page ceiling
    pub layout: Option<PageLayout>,
    /// Written SVG file
    pub svg: Option<PathBuf>,
    /// Written page images in page order
    pub pages: Vec<PathBuf>,
}

/// Runs one pattern request from parsed arguments
pub struct PatternProcessor {
    cli: Cli,
}

impl PatternProcessor {
    /// Create a processor for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Compute the pattern, tile it and write the requested files
    ///
    /// A layout that exceeds the page ceiling only fails the run when pages
    /// were asked for; otherwise it is reported and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the measurements are invalid, the shade cannot be
    /// unrolled, the requested pages exceed the ceiling, or a file cannot be written
    pub fn process(&self) -> Result<PatternReport> {
        let dimensions = self.cli.dimensions()?;
        let outline = compute(&dimensions)?;
        Self::log_outline(&outline);

        let page = self.cli.page_spec()?;
        let layout = match tile(&outline, &page, &self.cli.tiling_config()) {
            Ok(layout) => {
                log::info!(
                    "layout: {} columns x {} rows = {} pages",
                    layout.columns(),
                    layout.rows(),
                    layout.page_count()
                );
                Some(layout)
            }
            Err(error) if self.cli.pages.is_none() => {
                log::warn!("{error}");
                None
            }
            Err(error) => return Err(error),
        };

        let svg = match self.cli.svg_path() {
            Some(path) => {
                export_outline_svg(&outline, &path)?;
                Some(path)
            }
            None => None,
        };

        let pages = match (&self.cli.pages, &layout) {
            (Some(dir), Some(layout)) => {
                let pixels_per_unit = self.cli.pixels_per_unit()?;
                let progress = if self.cli.should_show_progress() {
                    ExportProgress::new(layout.page_count())
                } else {
                    ExportProgress::hidden(layout.page_count())
                };
                export_pages(&outline, layout, dir, pixels_per_unit, Some(&progress))?
            }
            _ => Vec::new(),
        };

        Ok(PatternReport {
            outline,
            layout,
            svg,
            pages,
        })
    }

    fn log_outline(outline: &PatternOutline) {
        let unit = outline.dimensions().unit;
        match outline {
            PatternOutline::Cylinder(pattern) => {
                log::info!(
                    "drum pattern: {:.3} {unit} x {:.3} {unit}",
                    pattern.circumference(),
                    pattern.height()
                );
            }
            PatternOutline::Frustum(pattern) => {
                log::info!(
                    "tapered pattern: slant {:.3} {unit}, radii {:.3}/{:.3} {unit}, angle {:.4} rad{}",
                    pattern.slant_height(),
                    pattern.inner_radius(),
                    pattern.outer_radius(),
                    pattern.sector_angle(),
                    if pattern.is_large_arc() { " (large arc)" } else { "" }
                );
                log::info!(
                    "bounding box: {:.3} {unit} x {:.3} {unit}",
                    outline.width(),
                    outline.height()
                );
            }
        }
    }
}
