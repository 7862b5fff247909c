//! Generation parameters

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use splinecloud_core::{Color, Error, Result};

use crate::noise::NOISE_SCALE;

/// How the vertical and horizontal curves combine into 3D positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryMode {
    /// The horizontal shape is swept along the vertical profile, scaled by its radius
    #[default]
    Sweep,
    /// The vertical profile is revolved around the Y axis
    Revolution,
    /// A height field over a flat grid
    Sheet,
}

/// How each point picks its color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Every point uses the primary color
    Solid,
    /// Blend by the vertical profile's height sample
    #[default]
    Height,
    /// Blend by the point's position along the grid depth
    Depth,
}

impl FromStr for GeometryMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sweep" => Ok(GeometryMode::Sweep),
            "revolution" => Ok(GeometryMode::Revolution),
            "sheet" => Ok(GeometryMode::Sheet),
            other => Err(Error::InvalidParameter(format!(
                "unknown geometry mode {:?}, expected sweep, revolution or sheet",
                other
            ))),
        }
    }
}

impl FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(ColorMode::Solid),
            "height" => Ok(ColorMode::Height),
            "depth" => Ok(ColorMode::Depth),
            other => Err(Error::InvalidParameter(format!(
                "unknown color mode {:?}, expected solid, height or depth",
                other
            ))),
        }
    }
}

/// Parameters for one generation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationParams {
    /// Subdivisions per curve; the cloud has `(density + 1)^2` points
    pub density: u32,
    /// Height scale applied to the vertical profile
    pub height: f32,
    pub color: Color,
    pub color2: Color,
    pub color_mode: ColorMode,
    /// Jitter amount; each axis moves by up to `noise * 10` either way
    pub noise: f32,
    pub grid_width: f32,
    pub grid_depth: f32,
    pub geometry_mode: GeometryMode,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            density: 40,
            height: 1.0,
            color: Color::new(0x4f, 0x9d, 0xff),
            color2: Color::new(0xff, 0x5f, 0xa2),
            color_mode: ColorMode::Height,
            noise: 0.0,
            grid_width: 400.0,
            grid_depth: 400.0,
            geometry_mode: GeometryMode::Sweep,
        }
    }
}

impl GenerationParams {
    pub fn with_density(mut self, density: u32) -> Self {
        self.density = density;
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn with_colors(mut self, color: Color, color2: Color) -> Self {
        self.color = color;
        self.color2 = color2;
        self
    }

    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    pub fn with_noise(mut self, noise: f32) -> Self {
        self.noise = noise;
        self
    }

    pub fn with_grid(mut self, grid_width: f32, grid_depth: f32) -> Self {
        self.grid_width = grid_width;
        self.grid_depth = grid_depth;
        self
    }

    pub fn with_geometry_mode(mut self, geometry_mode: GeometryMode) -> Self {
        self.geometry_mode = geometry_mode;
        self
    }

    /// Number of points a generation call produces
    pub fn point_count(&self) -> Result<usize> {
        let side = self.density as usize + 1;
        side.checked_mul(side).ok_or_else(|| {
            Error::InvalidParameter(format!("density {} overflows the point count", self.density))
        })
    }

    /// Reject parameters that cannot produce a meaningful cloud
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("height", self.height),
            ("noise", self.noise),
            ("gridWidth", self.grid_width),
            ("gridDepth", self.grid_depth),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidParameter(format!("{} must be finite", name)));
        }
        if self.noise < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "noise must be non-negative, got {}",
                self.noise
            )));
        }
        if !(self.noise * NOISE_SCALE * 2.0).is_finite() {
            return Err(Error::InvalidParameter(format!(
                "noise {} is too large to sample",
                self.noise
            )));
        }
        if self.grid_width <= 0.0 || self.grid_depth <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "grid must have positive size, got {}x{}",
                self.grid_width, self.grid_depth
            )));
        }
        self.point_count()?;
        Ok(())
    }
}

/// Convert a signed density from an untyped source, rejecting negatives
pub fn density_from_signed(value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        Error::InvalidParameter(format!(
            "density must be a non-negative integer no larger than {}, got {}",
            u32::MAX,
            value
        ))
    })
}
