//! Basic usage example for splinecloud
//!
//! This example demonstrates fundamental operations:
//! - Editing the profile curves
//! - Generating clouds in each geometry mode
//! - Projecting through the shared view
//! - Exporting OBJ and SVG

use rand::rngs::StdRng;
use rand::SeedableRng;
use splinecloud_algorithms::{generate_surface, ColorMode, GenerationParams, GeometryMode};
use splinecloud_core::{Axis, ControlPoint, Drawable, Handle, Spline, ViewState, Viewport};
use splinecloud_io::{ObjWriter, SvgExportConfig};
use splinecloud_visualization::{render_svg, ProjectionOptions, ProjectionPipeline};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("splinecloud Basic Usage Example");
    println!("===============================");

    // A vase-like profile with a smooth belly
    let mut vertical = Spline::new(vec![
        ControlPoint::sharp(0.3, 0.0),
        ControlPoint::smooth(0.8, 0.45, Handle::new(0.0, 0.2)),
        ControlPoint::sharp(0.25, 1.0),
    ]);
    vertical.move_anchor(2, 0.4, 1.0)?;
    let horizontal = Spline::default_horizontal();

    println!("\nCurves:");
    println!("- Vertical profile: {} anchors, {} segments", vertical.len(), vertical.segment_count());
    println!("- Horizontal shape: {} anchors, {} segments", horizontal.len(), horizontal.segment_count());
    println!("- Profile radius at mid height: {:.2}", vertical.sample(0.5, Axis::X));

    let mut rng = StdRng::seed_from_u64(7);
    println!("\nGeneration:");
    for mode in [GeometryMode::Sweep, GeometryMode::Revolution, GeometryMode::Sheet] {
        let params = GenerationParams::default()
            .with_density(30)
            .with_geometry_mode(mode)
            .with_color_mode(ColorMode::Height);
        let cloud = generate_surface(&vertical, &horizontal, &params, &mut rng)?;
        let (min, max) = cloud.bounding_box();
        println!(
            "- {:?}: {} points, bounds ({:.1}, {:.1}, {:.1}) .. ({:.1}, {:.1}, {:.1})",
            mode,
            cloud.len(),
            min.x,
            min.y,
            min.z,
            max.x,
            max.y,
            max.z
        );
    }

    let params = GenerationParams::default()
        .with_density(40)
        .with_noise(0.3)
        .with_geometry_mode(GeometryMode::Revolution);
    let cloud = generate_surface(&vertical, &horizontal, &params, &mut rng)?;

    let view = ViewState::default().with_angles(0.4, 0.8).with_zoom(1.2);
    let viewport = Viewport::new(640, 480)?;
    let pipeline = ProjectionPipeline::new(view, viewport)?;
    let discs = pipeline.project_cloud(&cloud);
    println!("\nProjection:");
    println!("- {} of {} points visible", discs.len(), cloud.len());
    if let (Some(back), Some(front)) = (discs.first(), discs.last()) {
        println!("- Farthest disc r={:.2}, nearest disc r={:.2}", back.radius, front.radius);
    }

    println!("\nExport:");
    let obj = ObjWriter::to_obj_string(cloud.as_slice());
    println!("- OBJ: {} lines", obj.lines().count());
    let svg = render_svg(
        cloud.as_slice(),
        view,
        viewport,
        ProjectionOptions::default(),
        &SvgExportConfig::default(),
    )?;
    println!("- SVG: {} circles", svg.matches("<circle").count());

    Ok(())
}
