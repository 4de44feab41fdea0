//! Full-size vector export of a pattern outline

use std::path::Path;

use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Path as SvgPath, Rectangle};

use crate::geometry::outline::{PathCommand, PatternOutline};
use crate::io::error::{PatternError, Result};

/// Build an SVG document drawing the outline at physical size
///
/// The view box is the outline's bounding box, and the document width and
/// height carry the measurement unit so the file prints 1:1.
pub fn outline_document(outline: &PatternOutline) -> Document {
    let bounds = outline.bounding_box();
    let unit = outline.dimensions().unit.suffix();

    let shape: Box<dyn svg::Node> = match outline {
        PatternOutline::Cylinder(pattern) => Box::new(
            Rectangle::new()
                .set("x", 0.0)
                .set("y", 0.0)
                .set("width", pattern.circumference())
                .set("height", pattern.height())
                .set("fill", "none")
                .set("stroke", "black")
                .set("vector-effect", "non-scaling-stroke"),
        ),
        PatternOutline::Frustum(pattern) => Box::new(
            SvgPath::new()
                .set("d", path_data(pattern.boundary()))
                .set("fill", "none")
                .set("stroke", "black")
                .set("vector-effect", "non-scaling-stroke"),
        ),
    };

    Document::new()
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                bounds.min_x, bounds.min_y, bounds.width, bounds.height
            ),
        )
        .set("width", format!("{}{unit}", bounds.width))
        .set("height", format!("{}{unit}", bounds.height))
        .add(shape)
}

/// Convert drawing commands into SVG path data
///
/// Path data is single precision, which is ample for patterns measured in
/// everyday units.
pub fn path_data(commands: &[PathCommand]) -> Data {
    commands
        .iter()
        .fold(Data::new(), |data, command| match *command {
            PathCommand::MoveTo(point) => data.move_to((point.x as f32, point.y as f32)),
            PathCommand::LineTo(point) => data.line_to((point.x as f32, point.y as f32)),
            PathCommand::ArcTo {
                radius,
                large_arc,
                sweep,
                end,
            } => data.elliptical_arc_to((
                radius as f32,
                radius as f32,
                0.0_f32,
                f32::from(u8::from(large_arc)),
                f32::from(u8::from(sweep)),
                end.x as f32,
                end.y as f32,
            )),
            PathCommand::ClosePath => data.close(),
        })
}

/// Write the outline as an SVG file
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file cannot be written
pub fn export_outline_svg(outline: &PatternOutline, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PatternError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    svg::save(output_path, &outline_document(outline)).map_err(|e| PatternError::SvgExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    log::info!("wrote outline to {}", output_path.display());
    Ok(())
}
