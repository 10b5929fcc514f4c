//! Solver configuration and result types.
//!
//! - `MveeCfg`: convergence tolerance and iteration cap.
//! - `ShapeMatrix`: ellipsoid `{x : (x−c)ᵗA(x−c) ≤ 1}`.
//! - `MveeSolution`: shape plus the final simplex weights and convergence info.

use nalgebra::{DMatrix, DVector};

use crate::error::MveeError;
use crate::hull::Point2;

/// Khachiyan iteration controls.
///
/// - Smaller `tol` tightens convergence and costs more iterations.
/// - `max_iterations` bounds worst-case runtime; hitting it is not an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MveeCfg {
    /// Stop once `‖u_{k+1} − u_k‖₂ ≤ tol`.
    pub tol: f64,
    pub max_iterations: usize,
}

impl Default for MveeCfg {
    fn default() -> Self {
        Self {
            tol: 1e-3,
            max_iterations: 1000,
        }
    }
}

impl MveeCfg {
    pub fn validate(&self) -> Result<(), MveeError> {
        if !self.tol.is_finite() || self.tol < 0.0 {
            return Err(MveeError::InvalidConfig {
                field: "tol",
                value: self.tol,
            });
        }
        Ok(())
    }
}

/// Symmetric positive-definite `a` (d×d) and centre `center` (length d).
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeMatrix {
    pub a: DMatrix<f64>,
    pub center: DVector<f64>,
}

impl ShapeMatrix {
    #[inline]
    pub fn dim(&self) -> usize {
        self.center.len()
    }

    /// `(p − c)ᵗ A (p − c)`; values ≤ 1 lie inside the ellipsoid.
    pub fn quadratic_form(&self, p: &DVector<f64>) -> Result<f64, MveeError> {
        if p.len() != self.dim() {
            return Err(MveeError::Shape(format!(
                "point of dimension {} against shape of dimension {}",
                p.len(),
                self.dim()
            )));
        }
        let r = p - &self.center;
        Ok(r.dot(&(&self.a * &r)))
    }

    /// Planar shorthand for `quadratic_form`.
    #[inline]
    pub fn quadratic_form2(&self, p: Point2) -> Result<f64, MveeError> {
        self.quadratic_form(&DVector::from_column_slice(p.as_slice()))
    }

    pub fn contains_eps(&self, p: &DVector<f64>, eps: f64) -> Result<bool, MveeError> {
        Ok(self.quadratic_form(p)? <= 1.0 + eps)
    }
}

/// Output of one solve.
#[derive(Clone, Debug)]
pub struct MveeSolution {
    pub shape: ShapeMatrix,
    /// Final point on the probability simplex, one weight per input point.
    pub weights: DVector<f64>,
    pub iterations: usize,
    /// False if `max_iterations` was reached before `tol`.
    pub converged: bool,
    /// Last weight change `‖Δu‖₂` (∞ if no iteration ran).
    pub final_err: f64,
}
