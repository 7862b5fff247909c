//! # splinecloud
//!
//! Procedural 3D point clouds from two Bezier profile curves.
//!
//! This is the umbrella crate that provides convenient access to all splinecloud
//! functionality. You can use this crate to get everything in one place, or use
//! individual crates for more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Colors, splines, points, view state
//! - **Algorithms**: Surface generation in sweep, revolution and sheet modes
//! - **I/O**: OBJ, SVG and JSON scene files
//! - **Visualization**: Shared model-view-projection pipeline and a software renderer
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use splinecloud::prelude::*;
//!
//! let params = GenerationParams::default().with_density(10);
//! let cloud = generate_surface(
//!     &Spline::default_vertical(),
//!     &Spline::default_horizontal(),
//!     &params,
//!     &mut rand::rngs::StdRng::seed_from_u64(1),
//! )
//! .unwrap();
//! assert_eq!(cloud.len(), 121);
//!
//! let pipeline = ProjectionPipeline::new(ViewState::default(), Viewport::default()).unwrap();
//! let discs = pipeline.project_cloud(&cloud);
//! let svg = screen_points_to_svg(&discs, pipeline.viewport(), &SvgExportConfig::default());
//! assert!(svg.contains("<circle"));
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables algorithms, io and visualization
//! - `algorithms`: Surface generation
//! - `io`: File format support
//! - `visualization`: Projection and rendering
//! - `all`: Enables all features

// Re-export core functionality
pub use splinecloud_core::*;

// Re-export sub-crates
#[cfg(feature = "algorithms")]
pub use splinecloud_algorithms as algorithms;

#[cfg(feature = "io")]
pub use splinecloud_io as io;

#[cfg(feature = "visualization")]
pub use splinecloud_visualization as visualization;

/// Convenient imports for common use cases
pub mod prelude {
    pub use splinecloud_core::*;

    #[cfg(feature = "algorithms")]
    pub use splinecloud_algorithms::*;

    #[cfg(feature = "io")]
    pub use splinecloud_io::*;

    #[cfg(feature = "visualization")]
    pub use splinecloud_visualization::*;
}
