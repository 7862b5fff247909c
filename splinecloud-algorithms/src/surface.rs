//! Surface generation from a vertical profile and a horizontal shape
//!
//! For every pair `(i, j)` in `0..=density` the vertical spline is sampled at
//! `v = i / density` for a radius (x) and height (y), and the horizontal spline
//! at `u = j / density`. The geometry mode decides how those samples become a
//! position. Points are emitted row-major: `v` in the outer loop, `u` inner.

use std::f32::consts::TAU;

use log::debug;
use rand::Rng;
use splinecloud_core::{
    Axis, Color, ColoredPoint3f, ColoredPointCloud3f, Point3f, PointCloud, Result, Spline,
};

use crate::noise::jitter;
use crate::params::{ColorMode, GenerationParams, GeometryMode};

/// Samples of the vertical profile at one `v`
#[derive(Debug, Clone, Copy)]
struct ProfileSample {
    radius: f32,
    height: f32,
    v: f32,
}

/// Samples of the horizontal shape at one `u`
#[derive(Debug, Clone, Copy)]
struct ShapeSample {
    x: f32,
    y: f32,
    u: f32,
}

/// Generate a colored point cloud of `(density + 1)^2` points.
///
/// Noise, when enabled, draws from `rng`; with `noise == 0` the generator is
/// never touched and the output is fully deterministic.
pub fn generate_surface<R: Rng + ?Sized>(
    vertical: &Spline,
    horizontal: &Spline,
    params: &GenerationParams,
    rng: &mut R,
) -> Result<ColoredPointCloud3f> {
    params.validate()?;

    let density = params.density;
    let shape: Vec<ShapeSample> = (0..=density)
        .map(|j| {
            let u = curve_parameter(j, density);
            let (x, y) = horizontal.sample_point(u);
            ShapeSample { x, y, u }
        })
        .collect();

    let mut cloud = PointCloud::with_capacity(params.point_count()?);
    for i in 0..=density {
        let v = curve_parameter(i, density);
        let profile = ProfileSample {
            radius: vertical.sample(v, Axis::X),
            height: vertical.sample(v, Axis::Y),
            v,
        };

        for sample in &shape {
            let mut point = surface_point(&profile, sample, params);
            if params.noise > 0.0 {
                point.position += jitter(rng, params.noise);
            }
            cloud.push(point);
        }
    }

    debug!(
        "generated {} points ({:?}, density {}, noise {})",
        cloud.len(),
        params.geometry_mode,
        density,
        params.noise
    );
    Ok(cloud)
}

/// Noise-free point for explicit curve parameters `u` (horizontal) and `v` (vertical)
pub fn sample_surface_point(
    vertical: &Spline,
    horizontal: &Spline,
    params: &GenerationParams,
    u: f32,
    v: f32,
) -> ColoredPoint3f {
    let profile = ProfileSample {
        radius: vertical.sample(v, Axis::X),
        height: vertical.sample(v, Axis::Y),
        v,
    };
    let (x, y) = horizontal.sample_point(u);
    surface_point(&profile, &ShapeSample { x, y, u }, params)
}

fn curve_parameter(step: u32, density: u32) -> f32 {
    if density == 0 {
        0.0
    } else {
        step as f32 / density as f32
    }
}

fn surface_point(profile: &ProfileSample, shape: &ShapeSample, params: &GenerationParams) -> ColoredPoint3f {
    let position = position(profile, shape, params);
    let color = point_color(profile, &position, params);
    ColoredPoint3f { position, color }
}

fn position(profile: &ProfileSample, shape: &ShapeSample, params: &GenerationParams) -> Point3f {
    let half_width = params.grid_width / 2.0;
    // `+ 0.0` keeps a zero height from turning into -0.0
    let lift = |height: f32| -(height * params.height * half_width) + 0.0;

    match params.geometry_mode {
        GeometryMode::Sweep => {
            let raw_x = (shape.x - 0.5) * params.grid_width;
            let raw_z = (shape.y - 0.5) * params.grid_depth;
            Point3f::new(raw_x * profile.radius, lift(profile.height), raw_z * profile.radius)
        }
        GeometryMode::Revolution => {
            let angle = shape.u * TAU;
            let radius = half_width * profile.radius;
            Point3f::new(angle.cos() * radius, lift(profile.height), angle.sin() * radius)
        }
        GeometryMode::Sheet => {
            let x = (shape.u - 0.5) * params.grid_width;
            let z = (profile.v - 0.5) * params.grid_depth;
            let combined = (profile.height + shape.y) / 2.0;
            Point3f::new(x, lift(combined), z)
        }
    }
}

fn point_color(profile: &ProfileSample, position: &Point3f, params: &GenerationParams) -> Color {
    match params.color_mode {
        ColorMode::Solid => params.color,
        ColorMode::Height => params.color.lerp(&params.color2, profile.height),
        ColorMode::Depth => {
            let depth = ((position.z + params.grid_depth / 2.0) / params.grid_depth).clamp(0.0, 1.0);
            params.color.lerp(&params.color2, depth)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use splinecloud_core::ControlPoint;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1234)
    }

    fn flat_profile(radius: f32, height: f32) -> Spline {
        Spline::new(vec![
            ControlPoint::sharp(radius, height),
            ControlPoint::sharp(radius, height),
        ])
    }

    #[test]
    fn test_point_count_for_every_mode() {
        let vertical = Spline::default_vertical();
        let horizontal = Spline::default_horizontal();
        for mode in [GeometryMode::Sweep, GeometryMode::Revolution, GeometryMode::Sheet] {
            for density in [0, 1, 7, 20] {
                let params = GenerationParams::default()
                    .with_density(density)
                    .with_geometry_mode(mode);
                let cloud = generate_surface(&vertical, &horizontal, &params, &mut rng()).unwrap();
                let side = density as usize + 1;
                assert_eq!(cloud.len(), side * side, "{:?} density {}", mode, density);
            }
        }
    }

    #[test]
    fn test_density_zero_samples_curve_start() {
        let vertical = Spline::default_vertical();
        let horizontal = Spline::default_horizontal();
        let params = GenerationParams::default().with_density(0);
        let cloud = generate_surface(&vertical, &horizontal, &params, &mut rng()).unwrap();
        assert_eq!(cloud.len(), 1);
        assert_eq!(cloud[0], sample_surface_point(&vertical, &horizontal, &params, 0.0, 0.0));
    }

    #[test]
    fn test_base_row_height_is_positive_zero() {
        let params = GenerationParams::default().with_density(1);
        let cloud = generate_surface(
            &Spline::default_vertical(),
            &Spline::default_horizontal(),
            &params,
            &mut rng(),
        )
        .unwrap();
        assert_eq!(cloud[0].position.y, 0.0);
        assert!(cloud[0].position.y.is_sign_positive());
    }

    #[test]
    fn test_row_major_order() {
        let vertical = Spline::default_vertical();
        let horizontal = Spline::default_horizontal();
        let params = GenerationParams::default().with_density(4).with_geometry_mode(GeometryMode::Sheet);
        let cloud = generate_surface(&vertical, &horizontal, &params, &mut rng()).unwrap();
        for i in 0..=4 {
            for j in 0..=4 {
                let expected = sample_surface_point(&vertical, &horizontal, &params, j as f32 / 4.0, i as f32 / 4.0);
                assert_eq!(cloud[i * 5 + j], expected);
            }
        }
    }

    #[test]
    fn test_revolution_rings_have_constant_radius() {
        let vertical = Spline::default_vertical();
        let horizontal = Spline::default_horizontal();
        let params = GenerationParams::default()
            .with_density(16)
            .with_geometry_mode(GeometryMode::Revolution);
        let cloud = generate_surface(&vertical, &horizontal, &params, &mut rng()).unwrap();

        for i in 0..=16usize {
            let v = i as f32 / 16.0;
            let expected = params.grid_width / 2.0 * vertical.sample(v, Axis::X);
            let y = vertical.sample(v, Axis::Y);
            for j in 0..=16usize {
                let p = cloud[i * 17 + j].position;
                assert_abs_diff_eq!((p.x * p.x + p.z * p.z).sqrt(), expected, epsilon = 1e-3);
                assert_abs_diff_eq!(p.y, -(y * params.height * params.grid_width / 2.0), epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn test_sweep_scales_shape_by_profile_radius() {
        let vertical = flat_profile(0.5, 0.25);
        let horizontal = Spline::new(vec![ControlPoint::sharp(0.0, 1.0), ControlPoint::sharp(1.0, 0.0)]);
        let params = GenerationParams::default().with_grid(200.0, 100.0).with_height(2.0);

        let start = sample_surface_point(&vertical, &horizontal, &params, 0.0, 0.0).position;
        assert_abs_diff_eq!(start.x, -50.0, epsilon = 1e-4);
        assert_abs_diff_eq!(start.z, 25.0, epsilon = 1e-4);
        assert_abs_diff_eq!(start.y, -50.0, epsilon = 1e-4);

        let end = sample_surface_point(&vertical, &horizontal, &params, 1.0, 0.0).position;
        assert_abs_diff_eq!(end.x, 50.0, epsilon = 1e-4);
        assert_abs_diff_eq!(end.z, -25.0, epsilon = 1e-4);
    }

    #[test]
    fn test_sheet_lays_out_uniform_grid() {
        let vertical = flat_profile(1.0, 0.2);
        let horizontal = flat_profile(0.0, 0.6);
        let params = GenerationParams::default()
            .with_density(2)
            .with_grid(100.0, 50.0)
            .with_geometry_mode(GeometryMode::Sheet);
        let cloud = generate_surface(&vertical, &horizontal, &params, &mut rng()).unwrap();

        let xs: Vec<f32> = cloud.iter().take(3).map(|p| p.position.x).collect();
        assert_eq!(xs, vec![-50.0, 0.0, 50.0]);
        let zs: Vec<f32> = cloud.iter().step_by(3).map(|p| p.position.z).collect();
        assert_eq!(zs, vec![-25.0, 0.0, 25.0]);
        for p in &cloud {
            assert_abs_diff_eq!(p.position.y, -(0.4 * 50.0), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_color_modes() {
        let vertical = Spline::new(vec![ControlPoint::sharp(1.0, 0.0), ControlPoint::sharp(1.0, 1.0)]);
        let horizontal = Spline::default_horizontal();
        let black_to_white = GenerationParams::default()
            .with_density(2)
            .with_colors(Color::BLACK, Color::WHITE);

        let solid = black_to_white.clone().with_color_mode(ColorMode::Solid);
        let cloud = generate_surface(&vertical, &horizontal, &solid, &mut rng()).unwrap();
        assert!(cloud.iter().all(|p| p.color == Color::BLACK));

        let height = black_to_white.clone().with_color_mode(ColorMode::Height);
        let cloud = generate_surface(&vertical, &horizontal, &height, &mut rng()).unwrap();
        assert_eq!(cloud[0].color, Color::BLACK);
        assert_eq!(cloud[3].color, Color::new(128, 128, 128));
        assert_eq!(cloud[8].color, Color::WHITE);

        let depth = black_to_white
            .with_color_mode(ColorMode::Depth)
            .with_geometry_mode(GeometryMode::Sheet);
        let cloud = generate_surface(&vertical, &horizontal, &depth, &mut rng()).unwrap();
        assert_eq!(cloud[0].color, Color::BLACK);
        assert_eq!(cloud[4].color, Color::new(128, 128, 128));
        assert_eq!(cloud[8].color, Color::WHITE);
    }

    #[test]
    fn test_noise_is_bounded_and_seeded() {
        let vertical = Spline::default_vertical();
        let horizontal = Spline::default_horizontal();
        let clean = GenerationParams::default().with_density(6);
        let noisy = clean.clone().with_noise(0.5);

        let base = generate_surface(&vertical, &horizontal, &clean, &mut rng()).unwrap();
        let a = generate_surface(&vertical, &horizontal, &noisy, &mut rng()).unwrap();
        let b = generate_surface(&vertical, &horizontal, &noisy, &mut rng()).unwrap();
        assert_eq!(a, b);

        let mut moved = 0;
        for (p, q) in base.iter().zip(a.iter()) {
            let offset = q.position - p.position;
            assert!(offset.iter().all(|c| c.abs() <= 5.0 + 1e-3));
            assert_eq!(p.color, q.color);
            if offset.norm() > 0.0 {
                moved += 1;
            }
        }
        assert!(moved > base.len() / 2);
    }

    #[test]
    fn test_invalid_params_are_rejected() {
        let vertical = Spline::default_vertical();
        let horizontal = Spline::default_horizontal();
        let params = GenerationParams::default().with_noise(-1.0);
        assert!(generate_surface(&vertical, &horizontal, &params, &mut rng()).is_err());

        // A finite noise whose jitter interval overflows is an error, not a panic
        let params = GenerationParams::default().with_density(1).with_noise(2.0e37);
        assert!(generate_surface(&vertical, &horizontal, &params, &mut rng()).is_err());
    }
}
