//! Projected screen-space primitives

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A point after projection, ready to be drawn as a filled disc.
///
/// Coordinates are pixels with the origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    /// Normalized device depth in [0, 1]; larger is farther away
    pub depth: f32,
    /// Disc radius in pixels
    pub radius: f32,
    pub color: Color,
    /// Position of the source point in generation order
    pub index: usize,
}
