//! Convex hulls and minimum-volume enclosing ellipses of planar point sets.
//!
//! Pipeline
//! - `hull`: monotone-chain convex hull (CCW, strictly convex, deterministic).
//! - `solver`: Khachiyan iteration over simplex weights → `ShapeMatrix`.
//! - `ellipse`: eigen-decomposition of the shape into centre, semi-axes, angle.
//! - `pipeline::fit` runs all three; `sample` draws seeded test clouds.
//!
//! Everything is a pure, synchronous computation over caller-owned points.
//! Degenerate input is reported as `MveeError::Degenerate` and never as NaN.

pub mod api;
mod cfg;
pub mod ellipse;
pub mod error;
pub mod hull;
pub mod linalg;
pub mod pipeline;
pub mod sample;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use ellipse::EllipseParams;
pub use error::{Degeneracy, MveeError};
pub use hull::{ConvexHull, Point2};
pub use pipeline::{fit, Fit};
pub use solver::{MveeCfg, MveeSolution, ShapeMatrix};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::ellipse::EllipseParams;
    pub use crate::error::{Degeneracy, MveeError};
    pub use crate::hull::{ConvexHull, Point2};
    pub use crate::pipeline::{fit, Fit};
    pub use crate::sample::{sample_canvas_points, CanvasCfg};
    pub use crate::solver::{solve, solve_columns, MveeCfg, MveeSolution, ShapeMatrix};
    pub use nalgebra::Vector2 as Vec2;
}
