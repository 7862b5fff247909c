//! I/O operations for generated point clouds
//!
//! This crate writes the artifacts produced from a point cloud:
//! - OBJ files with per-vertex colors
//! - SVG documents from projected screen points
//! - JSON scene files holding curves, parameters and camera

pub mod obj;
pub mod svg;
pub mod scene;

pub use obj::ObjWriter;
pub use svg::{screen_points_to_svg, SvgExportConfig, SvgWriter};
pub use scene::{ExportSettings, SceneConfig};

use splinecloud_core::{ColoredPoint3f, Result};

/// Trait for writing colored point clouds to files
pub trait PointCloudWriter {
    fn write_point_cloud<P: AsRef<std::path::Path>>(points: &[ColoredPoint3f], path: P) -> Result<()>;
}
