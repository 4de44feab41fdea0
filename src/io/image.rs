//! Page rasterisation and PNG export of a tiled layout

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

use crate::geometry::distance::distance_to_boundary;
use crate::geometry::outline::{PatternOutline, Point};
use crate::io::configuration::{
    JOIN_MARK_COLOR, JOIN_MARK_LENGTH_PX, JOIN_MARK_THICKNESS_PX, LABEL_COLOR, LABEL_GAP_PX,
    LABEL_INSET_PX, LABEL_SCALE_PX, MAX_PAGE_PIXELS, OUTLINE_COLOR, OUTLINE_STROKE_PX,
    PAGE_BACKGROUND, PAGE_FILE_PREFIX,
};
use crate::io::error::{PatternError, Result, ensure_positive, invalid_parameter};
use crate::io::label::{draw_text, page_label, text_size};
use crate::io::progress::ExportProgress;
use crate::tiling::layout::{Edge, PageLayout, PageTile};

/// Pixel size of one page of `layout` at the given resolution
///
/// # Errors
///
/// Returns `InvalidParameter` if the resolution is not positive or the page
/// would exceed `MAX_PAGE_PIXELS` on a side
pub fn page_pixels(layout: &PageLayout, pixels_per_unit: f64) -> Result<(u32, u32)> {
    ensure_positive("pixels_per_unit", pixels_per_unit)?;

    let width = (layout.page().printable_width() * pixels_per_unit).ceil();
    let height = (layout.page().printable_height() * pixels_per_unit).ceil();
    let limit = f64::from(MAX_PAGE_PIXELS);

    if width > limit || height > limit {
        return Err(invalid_parameter(
            "pixels_per_unit",
            &pixels_per_unit,
            &format!("page raster {width}x{height} exceeds {MAX_PAGE_PIXELS} pixels per side"),
        ));
    }

    Ok(((width as u32).max(1), (height as u32).max(1)))
}

/// Draw one page: the part of the outline inside the page window plus join marks
///
/// Each join mark is labelled with the neighbouring page number, and the
/// top-left corner carries "PAGE N OF M".
///
/// # Errors
///
/// Returns an error if the page raster size is invalid (see [`page_pixels`])
pub fn render_page(
    outline: &PatternOutline,
    layout: &PageLayout,
    tile: &PageTile,
    pixels_per_unit: f64,
) -> Result<RgbaImage> {
    let (width, height) = page_pixels(layout, pixels_per_unit)?;
    let bounds = outline.bounding_box();
    let half_stroke = OUTLINE_STROKE_PX / 2.0 / pixels_per_unit;

    // Page coordinates map to outline coordinates by undoing the tile offset
    // and moving the bounding box corner to the page origin
    let origin_x = bounds.min_x - tile.offset_x;
    let origin_y = bounds.min_y - tile.offset_y;

    let mut page = RgbaImage::from_fn(width, height, |px, py| {
        let point = Point::new(
            (f64::from(px) + 0.5) / pixels_per_unit + origin_x,
            (f64::from(py) + 0.5) / pixels_per_unit + origin_y,
        );

        if bounds.contains(point, half_stroke)
            && distance_to_boundary(outline, point) <= half_stroke
        {
            Rgba(OUTLINE_COLOR)
        } else {
            Rgba(PAGE_BACKGROUND)
        }
    });

    let columns = layout.columns();
    for mark in &tile.joins {
        draw_join_mark(&mut page, mark.edge);

        let target = mark.target_page(columns).to_string();
        let (x, y) = join_label_position(page.dimensions(), mark.edge, &target);
        draw_text(&mut page, x, y, &target, LABEL_SCALE_PX, Rgba(LABEL_COLOR));
    }

    draw_text(
        &mut page,
        LABEL_INSET_PX,
        LABEL_INSET_PX,
        &page_label(tile.page_number(columns), layout.page_count()),
        LABEL_SCALE_PX,
        Rgba(LABEL_COLOR),
    );

    Ok(page)
}

/// Bar centred on a page edge showing where the neighbouring sheet attaches
fn draw_join_mark(page: &mut RgbaImage, edge: Edge) {
    let (width, height) = page.dimensions();
    let length = JOIN_MARK_LENGTH_PX;
    let thickness = JOIN_MARK_THICKNESS_PX;

    let (x0, y0, w, h) = match edge {
        Edge::Top => (width.saturating_sub(length) / 2, 0, length, thickness),
        Edge::Bottom => (
            width.saturating_sub(length) / 2,
            height.saturating_sub(thickness),
            length,
            thickness,
        ),
        Edge::Left => (0, height.saturating_sub(length) / 2, thickness, length),
        Edge::Right => (
            width.saturating_sub(thickness),
            height.saturating_sub(length) / 2,
            thickness,
            length,
        ),
    };

    for y in y0..y0.saturating_add(h) {
        for x in x0..x0.saturating_add(w) {
            if let Some(pixel) = page.get_pixel_mut_checked(x, y) {
                *pixel = Rgba(JOIN_MARK_COLOR);
            }
        }
    }
}

/// Top-left pixel of the page number written just inside a join mark bar
pub fn join_label_position(page_size: (u32, u32), edge: Edge, text: &str) -> (u32, u32) {
    let (width, height) = page_size;
    let (text_width, text_height) = text_size(text, LABEL_SCALE_PX);
    let offset = JOIN_MARK_THICKNESS_PX + LABEL_GAP_PX;
    let centre_x = width.saturating_sub(text_width) / 2;
    let centre_y = height.saturating_sub(text_height) / 2;

    match edge {
        Edge::Top => (centre_x, offset),
        Edge::Bottom => (centre_x, height.saturating_sub(offset + text_height)),
        Edge::Left => (offset, centre_y),
        Edge::Right => (width.saturating_sub(offset + text_width), centre_y),
    }
}

/// File name of a page image
pub fn page_file_name(tile: &PageTile) -> String {
    format!("{PAGE_FILE_PREFIX}_{}_{}.png", tile.row, tile.col)
}

/// Render every page of the layout into `output_dir` as PNG files
///
/// Returns the written paths in row-major page order.
///
/// # Errors
///
/// Returns an error if:
/// - The page raster size is invalid
/// - The output directory cannot be created
/// - A page image cannot be saved
pub fn export_pages(
    outline: &PatternOutline,
    layout: &PageLayout,
    output_dir: &Path,
    pixels_per_unit: f64,
    progress: Option<&ExportProgress>,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir).map_err(|e| PatternError::FileSystem {
        path: output_dir.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let total = layout.page_count();
    let mut written = Vec::with_capacity(total);

    for tile in layout.tiles() {
        let page = render_page(outline, layout, tile, pixels_per_unit)?;
        let path = output_dir.join(page_file_name(tile));

        page.save(&path).map_err(|e| PatternError::ImageExport {
            path: path.clone(),
            source: e,
        })?;

        log::info!(
            "page {} of {total} -> {}",
            tile.page_number(layout.columns()),
            path.display()
        );
        if let Some(progress) = progress {
            progress.page_written(tile.page_number(layout.columns()));
        }
        written.push(path);
    }

    if let Some(progress) = progress {
        progress.finish();
    }

    Ok(written)
}
