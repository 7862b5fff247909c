//! Positional jitter

use rand::Rng;
use splinecloud_core::Vector3f;

/// Half-width of the jitter interval per unit of noise
pub const NOISE_SCALE: f32 = 10.0;

/// Draw an independent uniform offset in `[-noise * 10, noise * 10]` per axis.
///
/// The random source is supplied by the caller so runs can be reproduced with
/// a seeded generator.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, noise: f32) -> Vector3f {
    let amplitude = noise * NOISE_SCALE;
    if amplitude <= 0.0 {
        return Vector3f::zeros();
    }
    Vector3f::new(
        rng.gen_range(-amplitude..=amplitude),
        rng.gen_range(-amplitude..=amplitude),
        rng.gen_range(-amplitude..=amplitude),
    )
}
