//! Minimum-volume enclosing ellipsoid via Khachiyan's first-order method.
//!
//! Purpose
//! - Optimise simplex weights `u` over the hull vertices until the weight
//!   update is below `tol`, then read off the ellipsoid from the weighted
//!   moments of the points.
//!
//! Model
//! - `Q` is the (d+1)×N homogeneous lift of the points (last row all ones).
//! - Each step moves weight towards the point of maximum leverage
//!   `M_jj = q_jᵗ (Q diag(u) Qᵗ)⁻¹ q_j`.
//! - At the end `c = Q u` (first d entries) and
//!   `A = (1/d) · ((Q diag(u) Qᵗ − c cᵗ)_{d×d})⁻¹`.
//!
//! Failure policy
//! - Singular moment matrices and a degenerate step size are reported as
//!   `MveeError::Degenerate`; non-convergence is only flagged.
//!
//! References
//! - L. G. Khachiyan, "Rounding of polytopes in the real number model of
//!   computation", Math. Oper. Res. 21 (1996).
//! - M. J. Todd, "Minimum-Volume Ellipsoids: Theory and Algorithms" (2016), ch. 3.

mod types;

pub use types::{MveeCfg, MveeSolution, ShapeMatrix};

use nalgebra::{DMatrix, DVector};

use crate::error::{Degeneracy, MveeError};
use crate::hull::ConvexHull;
use crate::linalg::{invert, multiply, outer_product, quadratic_diagonal, scale_columns, transpose};

/// Solve the MVEE of a planar hull.
///
/// Hulls with fewer than 3 vertices come from collinear input and are rejected.
pub fn solve(hull: &ConvexHull, cfg: &MveeCfg) -> Result<MveeSolution, MveeError> {
    let vertices = hull.vertices();
    if vertices.len() < 3 {
        return Err(Degeneracy::Collinear {
            vertices: vertices.len(),
        }
        .into());
    }
    let points = DMatrix::from_fn(2, vertices.len(), |r, c| vertices[c][r]);
    solve_columns(&points, cfg)
}

/// Solve the MVEE of the columns of `points` (d×N, one point per column).
///
/// Requires N ≥ d + 1 finite points.
pub fn solve_columns(points: &DMatrix<f64>, cfg: &MveeCfg) -> Result<MveeSolution, MveeError> {
    cfg.validate()?;
    let d = points.nrows();
    let n = points.ncols();
    if d == 0 {
        return Err(MveeError::Shape("points have dimension 0".into()));
    }
    if n < d + 1 {
        return Err(Degeneracy::TooFewPoints { got: n, need: d + 1 }.into());
    }
    if let Some(index) = points
        .column_iter()
        .position(|col| col.iter().any(|v| !v.is_finite()))
    {
        return Err(Degeneracy::NonFinite { index }.into());
    }

    let q = homogeneous(points);
    let qt = transpose(&q);
    let dim = d as f64;
    let mut u = DVector::from_element(n, 1.0 / n as f64);
    let mut err = f64::INFINITY;
    let mut iterations = 0usize;

    while err > cfg.tol && iterations < cfg.max_iterations {
        let x = moments(&q, &qt, &u)?;
        let leverage = quadratic_diagonal(&q, &invert(&x)?)?;
        let (j, max) = argmax(&leverage);
        if max.is_nan() || max <= 1.0 {
            return Err(Degeneracy::StepSize { max }.into());
        }
        let step = (max - dim - 1.0) / ((dim + 1.0) * (max - 1.0));
        if !step.is_finite() {
            return Err(Degeneracy::StepSize { max }.into());
        }
        let mut next = &u * (1.0 - step);
        next[j] += step;
        err = (&next - &u).norm();
        u = next;
        iterations += 1;
    }
    let converged = err <= cfg.tol;

    let x = moments(&q, &qt, &u)?;
    let lifted_center = &q * &u;
    let centered = x - outer_product(&lifted_center, &lifted_center);
    let block = centered.view((0, 0), (d, d)).into_owned();
    let a = invert(&block)? / dim;
    let center = lifted_center.rows(0, d).into_owned();

    tracing::debug!(n, d, iterations, err, converged, "mvee solve");
    if !converged {
        tracing::warn!(
            max_iterations = cfg.max_iterations,
            tol = cfg.tol,
            err,
            "mvee iteration cap reached before tolerance"
        );
    }
    Ok(MveeSolution {
        shape: ShapeMatrix { a, center },
        weights: u,
        iterations,
        converged,
        final_err: err,
    })
}

/// Stack a row of ones under the point columns.
fn homogeneous(points: &DMatrix<f64>) -> DMatrix<f64> {
    let d = points.nrows();
    DMatrix::from_fn(d + 1, points.ncols(), |r, c| {
        if r < d {
            points[(r, c)]
        } else {
            1.0
        }
    })
}

/// `X = Q diag(u) Qᵗ`.
#[inline]
fn moments(
    q: &DMatrix<f64>,
    qt: &DMatrix<f64>,
    u: &DVector<f64>,
) -> Result<DMatrix<f64>, MveeError> {
    Ok(multiply(&scale_columns(q, u)?, qt)?)
}

/// First index of the largest entry (NaN never wins over a number).
fn argmax(v: &DVector<f64>) -> (usize, f64) {
    let mut best = (0, v[0]);
    for (i, &x) in v.iter().enumerate().skip(1) {
        if x > best.1 || best.1.is_nan() {
            best = (i, x);
        }
    }
    best
}

#[cfg(test)]
mod tests;
