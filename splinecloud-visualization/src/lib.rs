//! Camera, projection and rendering for generated point clouds
//!
//! One [`ProjectionPipeline`] turns world-space points into depth-sorted
//! screen discs. Both consumers go through it:
//! - [`PointRenderer`] rasterizes the live frame
//! - [`render_svg`] writes the vector export

pub mod camera;
pub mod projection;
pub mod renderer;

pub use camera::*;
pub use projection::*;
pub use renderer::*;

use splinecloud_core::{ColoredPoint3f, Result, ViewState, Viewport};
use splinecloud_io::{screen_points_to_svg, SvgExportConfig};

/// Project a cloud exactly as the live view does and build an SVG document
pub fn render_svg(
    points: &[ColoredPoint3f],
    view: ViewState,
    viewport: Viewport,
    options: ProjectionOptions,
    config: &SvgExportConfig,
) -> Result<String> {
    let pipeline = ProjectionPipeline::new(view, viewport)?.with_options(options);
    let projected = pipeline.project_cloud(points);
    Ok(screen_points_to_svg(&projected, viewport, config))
}
