//! JSON scene files
//!
//! A scene bundles everything needed to reproduce a frame: both curves, the
//! generation parameters, the camera and the export settings. Every section is
//! optional in the file and falls back to its default.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use splinecloud_algorithms::GenerationParams;
use splinecloud_core::{Color, Error, Result, Spline, ViewState, Viewport};

/// Output settings shared by the raster and vector exports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportSettings {
    pub width: u32,
    pub height: u32,
    /// Disc radius in pixels at distance 1000 from the camera
    pub base_radius: f32,
    /// `None` exports a transparent background
    pub background: Option<Color>,
    /// RNG seed for noise; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            base_radius: 2.0,
            background: Some(Color::new(0x11, 0x11, 0x16)),
            seed: None,
        }
    }
}

impl ExportSettings {
    pub fn viewport(&self) -> Result<Viewport> {
        Viewport::new(self.width, self.height)
    }
}

/// A complete, serializable scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneConfig {
    pub vertical: Spline,
    pub horizontal: Spline,
    pub params: GenerationParams,
    pub view: ViewState,
    pub export: ExportSettings,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            vertical: Spline::default_vertical(),
            horizontal: Spline::default_horizontal(),
            params: GenerationParams::default(),
            view: ViewState::default(),
            export: ExportSettings::default(),
        }
    }
}

impl SceneConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let scene: SceneConfig =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Read and validate a scene file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let scene = Self::from_json_str(&json)?;
        debug!(
            "loaded scene from {} ({} + {} anchors)",
            path.display(),
            scene.vertical.len(),
            scene.horizontal.len()
        );
        Ok(scene)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_string()?)?;
        info!("saved scene to {}", path.display());
        Ok(())
    }

    /// Check every section that has preconditions
    pub fn validate(&self) -> Result<()> {
        self.params.validate()?;
        self.view.validate()?;
        self.export.viewport()?;
        if !(self.export.base_radius.is_finite() && self.export.base_radius > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "base radius must be positive, got {}",
                self.export.base_radius
            )));
        }
        Ok(())
    }
}
