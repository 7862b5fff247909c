//! Core data structures and curve math for splinecloud
//!
//! This crate provides the fundamental types shared by generation, projection
//! and export: colored points, point clouds, hex colors, Bezier splines,
//! camera view state and projected screen points.

pub mod point;
pub mod point_cloud;
pub mod color;
pub mod spline;
pub mod view;
pub mod screen;
pub mod traits;
pub mod error;

pub use point::*;
pub use point_cloud::*;
pub use color::*;
pub use spline::*;
pub use view::*;
pub use screen::*;
pub use traits::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Vector4, Matrix4};
