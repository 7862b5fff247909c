//! Camera matrices for the shared model-view-projection transform
//!
//! All matrices are column-major `nalgebra` 4x4 matrices. Builders return new
//! matrices; nothing is mutated in place.

use nalgebra::{Matrix4, Vector3};
use splinecloud_core::{Result, ViewState, Viewport};

/// Rotation about the X axis
pub fn rotation_x(angle: f32) -> Matrix4<f32> {
    Matrix4::from_axis_angle(&Vector3::x_axis(), angle)
}

/// Rotation about the Y axis
pub fn rotation_y(angle: f32) -> Matrix4<f32> {
    Matrix4::from_axis_angle(&Vector3::y_axis(), angle)
}

pub fn translation(x: f32, y: f32, z: f32) -> Matrix4<f32> {
    Matrix4::new_translation(&Vector3::new(x, y, z))
}

/// Right-handed perspective projection with a [0, 1] depth range.
///
/// View-space `z = -near` maps to depth 0 and `z = -far` to depth 1.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Matrix4<f32> {
    let f = 1.0 / (fov_y / 2.0).tan();
    let range = near - far;
    Matrix4::new(
        f / aspect, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, far / range, near * far / range,
        0.0, 0.0, -1.0, 0.0,
    )
}

/// A validated camera snapshot bound to a viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub view: ViewState,
    pub viewport: Viewport,
}

impl Camera {
    pub fn new(view: ViewState, viewport: Viewport) -> Result<Self> {
        view.validate()?;
        Viewport::new(viewport.width, viewport.height)?;
        Ok(Self { view, viewport })
    }

    /// Object rotation: `rotate_x * rotate_y`
    pub fn model_matrix(&self) -> Matrix4<f32> {
        rotation_x(self.view.angle_x) * rotation_y(self.view.angle_y)
    }

    /// Pan and dolly: the camera sits `1000 / zoom` units back along +Z
    pub fn view_matrix(&self) -> Matrix4<f32> {
        translation(
            self.view.offset_x,
            -self.view.offset_y,
            -self.view.camera_distance(),
        )
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        perspective(
            self.view.field_of_view,
            self.viewport.aspect_ratio(),
            self.view.near,
            self.view.far,
        )
    }

    /// `projection * view * model`
    pub fn mvp(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix() * self.model_matrix()
    }
}
