//! SVG export of projected point clouds
//!
//! The document has the viewport's pixel size, an optional solid background
//! rectangle and one filled `<circle>` per screen point. Points are written in
//! the order given, which callers keep back to front so later circles occlude
//! earlier ones.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use log::info;
use splinecloud_core::{Color, Result, ScreenPoint, Viewport};

/// Configuration options for SVG export
#[derive(Debug, Clone, PartialEq)]
pub struct SvgExportConfig {
    /// Decimal precision for coordinates and radii (default: 2)
    pub precision: u8,
    /// Solid background; `None` keeps the document transparent
    pub background: Option<Color>,
    /// Whether to include the XML declaration (default: true)
    pub xml_declaration: bool,
}

impl Default for SvgExportConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            background: None,
            xml_declaration: true,
        }
    }
}

impl SvgExportConfig {
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Disable the XML declaration for embedding in HTML
    pub fn without_xml_declaration(mut self) -> Self {
        self.xml_declaration = false;
        self
    }
}

fn format_coord(value: f32, precision: u8) -> String {
    format!("{:.prec$}", value, prec = precision as usize)
}

/// Build a complete SVG document from projected points
pub fn screen_points_to_svg(points: &[ScreenPoint], viewport: Viewport, config: &SvgExportConfig) -> String {
    let mut svg = String::with_capacity(128 + points.len() * 64);

    // fmt::Write into a String never fails
    if config.xml_declaration {
        let _ = writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    }
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = viewport.width,
        h = viewport.height
    );

    if let Some(background) = config.background {
        let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="{}"/>"#, background);
    }

    for point in points {
        let _ = writeln!(
            svg,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            format_coord(point.x, config.precision),
            format_coord(point.y, config.precision),
            format_coord(point.radius, config.precision),
            point.color
        );
    }

    svg.push_str("</svg>\n");
    svg
}

pub struct SvgWriter;

impl SvgWriter {
    /// Write projected points as an SVG file
    pub fn write<P: AsRef<Path>>(
        points: &[ScreenPoint],
        viewport: Viewport,
        path: P,
        config: &SvgExportConfig,
    ) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, screen_points_to_svg(points, viewport, config))?;
        info!("wrote {} circles to {}", points.len(), path.display());
        Ok(())
    }
}
