//! End-to-end fit: points → hull → MVEE → ellipse parameters.
//!
//! Pure and synchronous; every call allocates its own working state.

use nalgebra::DVector;

use crate::ellipse::EllipseParams;
use crate::error::MveeError;
use crate::hull::{ConvexHull, Point2};
use crate::solver::{solve, MveeCfg, ShapeMatrix};

/// Everything a renderer needs from one fit.
#[derive(Clone, Debug)]
pub struct Fit {
    pub hull: ConvexHull,
    pub shape: ShapeMatrix,
    pub ellipse: EllipseParams,
    /// Final simplex weights, aligned with `hull.vertices()`.
    pub weights: DVector<f64>,
    pub iterations: usize,
    pub converged: bool,
}

/// Run the full pipeline. On error no partial output is produced.
pub fn fit(points: &[Point2], cfg: &MveeCfg) -> Result<Fit, MveeError> {
    let hull = ConvexHull::from_points(points)?;
    let sol = solve(&hull, cfg)?;
    let ellipse = EllipseParams::from_shape(&sol.shape)?;
    tracing::debug!(
        points = points.len(),
        hull = hull.len(),
        rx = ellipse.rx,
        ry = ellipse.ry,
        converged = sol.converged,
        "mvee fit"
    );
    Ok(Fit {
        hull,
        shape: sol.shape,
        ellipse,
        weights: sol.weights,
        iterations: sol.iterations,
        converged: sol.converged,
    })
}
