//! Command-line generator: build a spline point cloud and export it
//!
//! A scene file supplies the starting state; flags override individual values.
//!
//! ```text
//! RUST_LOG=info cargo run --bin generate -- --mode revolution --density 60 --svg cloud.svg --png cloud.png
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use splinecloud_algorithms::{density_from_signed, generate_surface, ColorMode, GeometryMode};
use splinecloud_core::Color;
use splinecloud_io::{ObjWriter, PointCloudWriter, SceneConfig, SvgExportConfig, SvgWriter};
use splinecloud_visualization::{PointRenderer, ProjectionOptions, ProjectionPipeline};

#[derive(Parser)]
#[command(name = "generate", about = "Generate a point cloud from two Bezier profiles")]
struct Cli {
    /// JSON scene file to start from
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Subdivisions per curve
    #[arg(long, allow_negative_numbers = true)]
    density: Option<i64>,
    /// sweep, revolution or sheet
    #[arg(long)]
    mode: Option<GeometryMode>,
    /// solid, height or depth
    #[arg(long)]
    color_mode: Option<ColorMode>,
    #[arg(long)]
    noise: Option<f32>,
    #[arg(long)]
    height: Option<f32>,
    #[arg(long)]
    color: Option<Color>,
    #[arg(long)]
    color2: Option<Color>,
    #[arg(long)]
    grid_width: Option<f32>,
    #[arg(long)]
    grid_depth: Option<f32>,

    /// Rotation about X in radians
    #[arg(long, allow_negative_numbers = true)]
    angle_x: Option<f32>,
    /// Rotation about Y in radians
    #[arg(long, allow_negative_numbers = true)]
    angle_y: Option<f32>,
    #[arg(long)]
    zoom: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    offset_x: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    offset_y: Option<f32>,

    #[arg(long)]
    image_width: Option<u32>,
    #[arg(long)]
    image_height: Option<u32>,
    /// Disc radius at the reference distance
    #[arg(long)]
    radius: Option<f32>,
    /// Background color, or "none" for a transparent export
    #[arg(long, value_parser = parse_background)]
    background: Option<Background>,
    /// Seed for the noise generator
    #[arg(long)]
    seed: Option<u64>,

    /// Write the cloud as OBJ vertices with colors
    #[arg(long)]
    obj: Option<PathBuf>,
    /// Write the projected discs as SVG
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Render the projected discs to PNG
    #[arg(long)]
    png: Option<PathBuf>,
    /// Save the effective scene as JSON
    #[arg(long)]
    save_scene: Option<PathBuf>,
}

#[derive(Clone, Copy)]
struct Background(Option<Color>);

fn parse_background(value: &str) -> std::result::Result<Background, String> {
    if value.eq_ignore_ascii_case("none") {
        return Ok(Background(None));
    }
    value
        .parse::<Color>()
        .map(|c| Background(Some(c)))
        .map_err(|e| e.to_string())
}

impl Cli {
    fn apply(&self, scene: &mut SceneConfig) -> Result<()> {
        let params = &mut scene.params;
        if let Some(density) = self.density {
            params.density = density_from_signed(density)?;
        }
        if let Some(mode) = self.mode {
            params.geometry_mode = mode;
        }
        if let Some(color_mode) = self.color_mode {
            params.color_mode = color_mode;
        }
        if let Some(noise) = self.noise {
            params.noise = noise;
        }
        if let Some(height) = self.height {
            params.height = height;
        }
        if let Some(color) = self.color {
            params.color = color;
        }
        if let Some(color2) = self.color2 {
            params.color2 = color2;
        }
        if let Some(grid_width) = self.grid_width {
            params.grid_width = grid_width;
        }
        if let Some(grid_depth) = self.grid_depth {
            params.grid_depth = grid_depth;
        }

        let view = &mut scene.view;
        if let Some(angle_x) = self.angle_x {
            view.angle_x = angle_x;
        }
        if let Some(angle_y) = self.angle_y {
            view.angle_y = angle_y;
        }
        if let Some(zoom) = self.zoom {
            view.zoom = zoom;
        }
        if let Some(offset_x) = self.offset_x {
            view.offset_x = offset_x;
        }
        if let Some(offset_y) = self.offset_y {
            view.offset_y = offset_y;
        }

        let export = &mut scene.export;
        if let Some(width) = self.image_width {
            export.width = width;
        }
        if let Some(height) = self.image_height {
            export.height = height;
        }
        if let Some(radius) = self.radius {
            export.base_radius = radius;
        }
        if let Some(Background(background)) = self.background {
            export.background = background;
        }
        if self.seed.is_some() {
            export.seed = self.seed;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut scene = match &cli.scene {
        Some(path) => SceneConfig::load(path).with_context(|| format!("loading scene {}", path.display()))?,
        None => SceneConfig::default(),
    };
    cli.apply(&mut scene)?;
    scene.validate().context("invalid scene")?;

    let mut rng = match scene.export.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let cloud = generate_surface(&scene.vertical, &scene.horizontal, &scene.params, &mut rng)
        .context("generating point cloud")?;
    info!(
        "generated {} points ({:?}, {:?})",
        cloud.len(),
        scene.params.geometry_mode,
        scene.params.color_mode
    );

    if let Some(path) = &cli.obj {
        ObjWriter::write_point_cloud(cloud.as_slice(), path)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if cli.svg.is_some() || cli.png.is_some() {
        let viewport = scene.export.viewport()?;
        let options = ProjectionOptions {
            base_radius: scene.export.base_radius,
            ..ProjectionOptions::default()
        };
        let pipeline = ProjectionPipeline::new(scene.view, viewport)?.with_options(options);
        let discs = pipeline.project_cloud(&cloud);
        println!("{} of {} points visible", discs.len(), cloud.len());

        if let Some(path) = &cli.svg {
            let config = SvgExportConfig::default().with_background(scene.export.background);
            SvgWriter::write(&discs, viewport, path, &config)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        if let Some(path) = &cli.png {
            let renderer = PointRenderer::with_pipeline(pipeline, scene.export.background);
            renderer
                .save_png(&cloud, path)
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }

    if let Some(path) = &cli.save_scene {
        scene.save(path).with_context(|| format!("saving scene {}", path.display()))?;
    }

    Ok(())
}
