//! The projection pipeline shared by the live renderer and the vector exporter
//!
//! Points go through `mvp = projection * view * model`, are divided by `w`,
//! clipped to the [0, 1] depth range, mapped to top-left-origin pixels and
//! finally sorted back to front for painter's-order drawing.

use log::{debug, warn};
use nalgebra::Matrix4;
use splinecloud_core::{ColoredPoint3f, Point3f, Result, ScreenPoint, ViewState, Viewport};

use crate::camera::Camera;

/// Numerator of the perspective size falloff `1000 / w`
const SIZE_FALLOFF: f32 = 1000.0;

/// Point sizing for projected discs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionOptions {
    /// Radius in pixels of a point at distance 1000 from the camera
    pub base_radius: f32,
    /// Discs smaller than this are not drawn
    pub min_radius: f32,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            base_radius: 2.0,
            min_radius: 0.1,
        }
    }
}

/// A single projected position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub x: f32,
    pub y: f32,
    /// Normalized device depth in [0, 1]
    pub depth: f32,
    /// Homogeneous w, the distance along the view axis
    pub w: f32,
}

impl Projection {
    /// Perspective size factor `1000 / w`
    pub fn scale(&self) -> f32 {
        SIZE_FALLOFF / self.w
    }
}

/// Projects world-space points into viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPipeline {
    mvp: Matrix4<f32>,
    viewport: Viewport,
    options: ProjectionOptions,
}

impl ProjectionPipeline {
    pub fn new(view: ViewState, viewport: Viewport) -> Result<Self> {
        let camera = Camera::new(view, viewport)?;
        Ok(Self::from_camera(&camera))
    }

    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            mvp: camera.mvp(),
            viewport: camera.viewport,
            options: ProjectionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ProjectionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn mvp(&self) -> &Matrix4<f32> {
        &self.mvp
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn options(&self) -> &ProjectionOptions {
        &self.options
    }

    /// Project one position.
    ///
    /// Returns `None` when `w <= 0` (at or behind the camera plane) or when the
    /// depth falls outside the near/far range.
    pub fn project(&self, position: &Point3f) -> Option<Projection> {
        let clip = self.mvp * position.to_homogeneous();
        if clip.w <= 0.0 {
            return None;
        }

        let ndc = clip.xyz() / clip.w;
        if !(0.0..=1.0).contains(&ndc.z) {
            return None;
        }

        let width = self.viewport.width as f32;
        let height = self.viewport.height as f32;
        Some(Projection {
            x: (ndc.x * 0.5 + 0.5) * width,
            y: (1.0 - (ndc.y * 0.5 + 0.5)) * height,
            depth: ndc.z,
            w: clip.w,
        })
    }

    /// Project a colored point into a drawable disc, dropping it when clipped
    /// or smaller than the visibility threshold.
    pub fn project_point(&self, point: &ColoredPoint3f, index: usize) -> Option<ScreenPoint> {
        let projection = self.project(&point.position)?;
        let radius = projection.scale() * self.options.base_radius;
        if radius < self.options.min_radius {
            return None;
        }
        Some(ScreenPoint {
            x: projection.x,
            y: projection.y,
            depth: projection.depth,
            radius,
            color: point.color,
            index,
        })
    }

    /// Project every point and return the survivors farthest first.
    ///
    /// Points at equal depth keep their generation order.
    pub fn project_cloud<'a, I>(&self, points: I) -> Vec<ScreenPoint>
    where
        I: IntoIterator<Item = &'a ColoredPoint3f>,
    {
        let mut total = 0usize;
        let mut projected: Vec<ScreenPoint> = points
            .into_iter()
            .enumerate()
            .inspect(|_| total += 1)
            .filter_map(|(index, point)| self.project_point(point, index))
            .collect();
        depth_sort(&mut projected);

        debug!(
            "projected {} of {} points into {}x{}",
            projected.len(),
            total,
            self.viewport.width,
            self.viewport.height
        );
        if projected.is_empty() && total > 0 {
            warn!("all {} points were clipped; check zoom and clip planes", total);
        }
        projected
    }
}

/// Stable back-to-front sort by normalized depth
pub fn depth_sort(points: &mut [ScreenPoint]) {
    points.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}
