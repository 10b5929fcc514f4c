//! Curated surface for front-ends (rendering layers, the CLI).
//!
//! A front-end supplies points and consumes the hull polygon plus ellipse
//! parameters; it never needs the solver internals.

pub use crate::ellipse::EllipseParams;
pub use crate::error::MveeError;
pub use crate::hull::{ConvexHull, Point2};
pub use crate::pipeline::{fit, Fit};
pub use crate::sample::{sample_canvas_points, CanvasCfg};
pub use crate::solver::MveeCfg;

/// Fit with default tolerances, mapping degenerate input to `None`.
///
/// Other errors (shape mismatches, invalid configuration) are still returned.
pub fn fit_or_skip(points: &[Point2]) -> Result<Option<Fit>, MveeError> {
    match fit(points, &MveeCfg::default()) {
        Ok(f) => Ok(Some(f)),
        Err(e) if e.is_degenerate() => {
            tracing::debug!(error = %e, "skipping degenerate point set");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
