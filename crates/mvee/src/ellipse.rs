//! Geometric ellipse parameters from a planar shape matrix.
//!
//! With `A = λ1 e1 e1ᵗ + λ2 e2 e2ᵗ` (λ1 ≥ λ2 > 0) the ellipse
//! `(x−c)ᵗA(x−c) = 1` has semi-axes `rx = 1/√λ1` along `e1` and `ry = 1/√λ2`
//! along `e2`. The larger eigenvalue belongs to the shorter axis.

use std::f64::consts::TAU;

use nalgebra::{DMatrix, Matrix2};

use crate::error::{Degeneracy, MveeError};
use crate::hull::Point2;
use crate::linalg::symmetric_eigen;
use crate::solver::ShapeMatrix;

/// Centre, semi-axes and orientation of an ellipse.
///
/// `rotation` (radians) is the angle from the x-axis to the `rx` semi-axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipseParams {
    pub center: Point2,
    pub rx: f64,
    pub ry: f64,
    pub rotation: f64,
}

impl EllipseParams {
    /// Extract parameters from a 2×2 shape matrix.
    ///
    /// Errors
    /// - `Shape` if the shape is not planar.
    /// - `Degenerate(NotPositiveDefinite)` if an eigenvalue is ≤ 0 or not finite.
    pub fn from_shape(shape: &ShapeMatrix) -> Result<Self, MveeError> {
        if shape.dim() != 2 || shape.a.nrows() != 2 || shape.a.ncols() != 2 {
            return Err(MveeError::Shape(format!(
                "ellipse extraction needs a 2×2 shape, got {}×{} with centre of length {}",
                shape.a.nrows(),
                shape.a.ncols(),
                shape.dim()
            )));
        }
        let eig = symmetric_eigen(&shape.a)?;
        if let Some(&eigenvalue) = eig.values.iter().find(|l| !(l.is_finite() && **l > 0.0)) {
            return Err(Degeneracy::NotPositiveDefinite { eigenvalue }.into());
        }
        let e1 = eig.vectors.column(0);
        Ok(Self {
            center: Point2::new(shape.center[0], shape.center[1]),
            rx: 1.0 / eig.values[0].sqrt(),
            ry: 1.0 / eig.values[1].sqrt(),
            rotation: e1[1].atan2(e1[0]),
        })
    }

    #[inline]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.to_degrees()
    }

    #[inline]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.rx * self.ry
    }

    /// Boundary point at parameter `t` (radians along the parametrisation).
    pub fn point_at(&self, t: f64) -> Point2 {
        let (sr, cr) = self.rotation.sin_cos();
        let (st, ct) = t.sin_cos();
        let (lx, ly) = (self.rx * ct, self.ry * st);
        self.center + Point2::new(cr * lx - sr * ly, sr * lx + cr * ly)
    }

    /// `n` boundary samples, evenly spaced in the parameter, for polyline drawing.
    pub fn boundary(&self, n: usize) -> Vec<Point2> {
        (0..n)
            .map(|k| self.point_at(TAU * k as f64 / n as f64))
            .collect()
    }

    /// Rebuild the shape matrix `A = R diag(1/rx², 1/ry²) Rᵗ`.
    pub fn shape_matrix(&self) -> ShapeMatrix {
        let (s, c) = self.rotation.sin_cos();
        let r = Matrix2::new(c, -s, s, c);
        let d = Matrix2::new(self.rx.powi(-2), 0.0, 0.0, self.ry.powi(-2));
        let a = r * d * r.transpose();
        ShapeMatrix {
            a: DMatrix::from_column_slice(2, 2, a.as_slice()),
            center: nalgebra::DVector::from_column_slice(self.center.as_slice()),
        }
    }
}
