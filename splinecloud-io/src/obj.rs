//! Wavefront OBJ export with per-vertex colors
//!
//! Each point becomes one `v x y z r g b` line: positions with four decimals
//! and color channels normalized to [0, 1], also with four decimals. A single
//! comment line precedes the vertices.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use splinecloud_core::{ColoredPoint3f, Result};

use crate::PointCloudWriter;

pub struct ObjWriter;

impl ObjWriter {
    /// Write the OBJ text for `points` to any writer
    pub fn write_to<W: Write>(points: &[ColoredPoint3f], writer: &mut W) -> Result<()> {
        writeln!(writer, "# splinecloud point cloud export ({} points)", points.len())?;
        for point in points {
            writeln!(writer, "{}", Self::format_vertex(point))?;
        }
        Ok(())
    }

    /// OBJ text for `points` as a string
    pub fn to_obj_string(points: &[ColoredPoint3f]) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec<u8> cannot fail
        let _ = Self::write_to(points, &mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// One `v` line for a colored point. Negative zero prints as `0.0000`.
    pub fn format_vertex(point: &ColoredPoint3f) -> String {
        let p = point.position.map(|c| c + 0.0);
        let [r, g, b] = point.color.to_unit();
        format!(
            "v {:.4} {:.4} {:.4} {:.4} {:.4} {:.4}",
            p.x, p.y, p.z, r, g, b
        )
    }
}

impl PointCloudWriter for ObjWriter {
    fn write_point_cloud<P: AsRef<Path>>(points: &[ColoredPoint3f], path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        Self::write_to(points, &mut writer)?;
        writer.flush()?;
        info!("wrote {} vertices to {}", points.len(), path.display());
        Ok(())
    }
}
