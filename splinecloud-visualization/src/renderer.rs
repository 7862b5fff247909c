//! Software point renderer
//!
//! Draws projected points as filled discs into an RGBA frame in painter's
//! order, using the same [`ProjectionPipeline`] as the vector exporter so the
//! raster frame and the exported document agree.

use std::path::Path;

use image::{Rgba, RgbaImage};
use log::info;
use splinecloud_core::{Color, ColoredPoint3f, Error, Result, ScreenPoint, ViewState, Viewport};

use crate::projection::{ProjectionOptions, ProjectionPipeline};

/// Rendering configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Solid background; `None` leaves the frame transparent
    pub background: Option<Color>,
    pub projection: ProjectionOptions,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Some(Color::new(0x11, 0x11, 0x16)),
            projection: ProjectionOptions::default(),
        }
    }
}

/// Rasterizes point clouds for the live view
#[derive(Debug, Clone)]
pub struct PointRenderer {
    pipeline: ProjectionPipeline,
    background: Option<Color>,
}

impl PointRenderer {
    pub fn new(view: ViewState, viewport: Viewport, config: RenderConfig) -> Result<Self> {
        let pipeline = ProjectionPipeline::new(view, viewport)?.with_options(config.projection);
        Ok(Self::with_pipeline(pipeline, config.background))
    }

    pub fn with_pipeline(pipeline: ProjectionPipeline, background: Option<Color>) -> Self {
        Self { pipeline, background }
    }

    pub fn pipeline(&self) -> &ProjectionPipeline {
        &self.pipeline
    }

    /// Project and draw a cloud
    pub fn render<'a, I>(&self, points: I) -> RgbaImage
    where
        I: IntoIterator<Item = &'a ColoredPoint3f>,
    {
        let projected = self.pipeline.project_cloud(points);
        self.render_screen_points(&projected)
    }

    /// Draw already projected points in the order given
    pub fn render_screen_points(&self, points: &[ScreenPoint]) -> RgbaImage {
        let viewport = self.pipeline.viewport();
        let fill = match self.background {
            Some(color) => to_rgba(color),
            None => Rgba([0, 0, 0, 0]),
        };
        let mut frame = RgbaImage::from_pixel(viewport.width, viewport.height, fill);
        for point in points {
            fill_disc(&mut frame, point);
        }
        frame
    }

    /// Render a cloud and save the frame as PNG
    pub fn save_png<'a, I, P>(&self, points: I, path: P) -> Result<()>
    where
        I: IntoIterator<Item = &'a ColoredPoint3f>,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let frame = self.render(points);
        frame
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| Error::Visualization(format!("failed to write {}: {}", path.display(), e)))?;
        info!("wrote {}x{} frame to {}", frame.width(), frame.height(), path.display());
        Ok(())
    }
}

fn to_rgba(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, 255])
}

/// Cover every pixel whose center lies inside the disc
fn fill_disc(frame: &mut RgbaImage, point: &ScreenPoint) {
    let (width, height) = frame.dimensions();
    let min_x = (point.x - point.radius).floor().max(0.0) as u32;
    let min_y = (point.y - point.radius).floor().max(0.0) as u32;
    let max_x = (point.x + point.radius).ceil().min(width as f32) as u32;
    let max_y = (point.y + point.radius).ceil().min(height as f32) as u32;
    let radius_sq = point.radius * point.radius;
    let color = to_rgba(point.color);

    for py in min_y..max_y {
        for px in min_x..max_x {
            let dx = px as f32 + 0.5 - point.x;
            let dy = py as f32 + 0.5 - point.y;
            if dx * dx + dy * dy <= radius_sq {
                frame.put_pixel(px, py, color);
            }
        }
    }
}
