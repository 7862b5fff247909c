//! # splinecloud algorithms
//!
//! Point cloud synthesis from two Bezier profile curves.
//!
//! The vertical spline supplies a radius and a height per row, the horizontal
//! spline a shape per column, and a [`GeometryMode`] decides how the two
//! combine. Generation is a pure function of its inputs plus an injected
//! random source used only for positional noise.

pub mod params;
pub mod noise;
pub mod surface;

// Re-export commonly used items
pub use params::*;
pub use noise::*;
pub use surface::*;
