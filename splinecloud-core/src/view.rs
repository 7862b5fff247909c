//! Camera view state and viewport dimensions

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Snapshot of the interactive camera.
///
/// Owned by the live view; projection receives it by value and never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewState {
    /// Rotation about the X axis in radians
    pub angle_x: f32,
    /// Rotation about the Y axis in radians
    pub angle_y: f32,
    /// Zoom factor; the camera sits `1000 / zoom` units from the origin
    pub zoom: f32,
    /// Horizontal pan
    pub offset_x: f32,
    /// Vertical pan, positive moves the image down the screen
    pub offset_y: f32,
    /// Vertical field of view in radians
    pub field_of_view: f32,
    pub near: f32,
    pub far: f32,
}

impl ViewState {
    /// Distance from the camera to the origin before panning
    pub fn camera_distance(&self) -> f32 {
        1000.0 / self.zoom
    }

    pub fn with_angles(mut self, angle_x: f32, angle_y: f32) -> Self {
        self.angle_x = angle_x;
        self.angle_y = angle_y;
        self
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_offset(mut self, offset_x: f32, offset_y: f32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    pub fn with_clip_planes(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// Check that the camera describes a usable perspective projection
    pub fn validate(&self) -> Result<()> {
        let values = [
            self.angle_x,
            self.angle_y,
            self.zoom,
            self.offset_x,
            self.offset_y,
            self.field_of_view,
            self.near,
            self.far,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidParameter("view state contains a non-finite value".to_string()));
        }
        if self.zoom <= 0.0 {
            return Err(Error::InvalidParameter(format!("zoom must be positive, got {}", self.zoom)));
        }
        if self.field_of_view <= 0.0 || self.field_of_view >= std::f32::consts::PI {
            return Err(Error::InvalidParameter(format!(
                "field of view must lie in (0, pi), got {}",
                self.field_of_view
            )));
        }
        if self.near <= 0.0 || self.far <= self.near {
            return Err(Error::InvalidParameter(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                self.near, self.far
            )));
        }
        Ok(())
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            angle_x: 0.5,
            angle_y: 0.6,
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            field_of_view: 60f32.to_radians(),
            near: 1.0,
            far: 5000.0,
        }
    }
}

/// Output surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidParameter(format!(
                "viewport must be non-empty, got {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}
