//! Small dense linear algebra for the MVEE solver.
//!
//! Purpose
//! - Wrap exactly the operations the Khachiyan loop and the ellipse extractor
//!   need, with explicit shape checks and an explicit singularity signal.
//! - Matrices stay tiny: the working matrix is (d+1)×N and every inversion is
//!   (d+1)×(d+1) or d×d.
//!
//! Storage and products come from `nalgebra`; the policy decisions (pivot
//! thresholds, eigenvalue ordering, the closed-form 2×2 eigen solve) live here.

use nalgebra::{DMatrix, DVector, SymmetricEigen};

use crate::cfg::{PIVOT_EPS, SYM_EPS};
use crate::error::LinalgError;

#[inline]
fn dims(m: &DMatrix<f64>) -> (usize, usize) {
    (m.nrows(), m.ncols())
}

/// `a · b`.
pub fn multiply(a: &DMatrix<f64>, b: &DMatrix<f64>) -> Result<DMatrix<f64>, LinalgError> {
    if a.ncols() != b.nrows() {
        return Err(LinalgError::Shape {
            op: "multiply",
            left: dims(a),
            right: dims(b),
        });
    }
    Ok(a * b)
}

#[inline]
pub fn transpose(a: &DMatrix<f64>) -> DMatrix<f64> {
    a.transpose()
}

/// `u · vᵗ`.
#[inline]
pub fn outer_product(u: &DVector<f64>, v: &DVector<f64>) -> DMatrix<f64> {
    u * v.transpose()
}

/// `a · diag(w)` without materialising the N×N diagonal.
pub fn scale_columns(a: &DMatrix<f64>, w: &DVector<f64>) -> Result<DMatrix<f64>, LinalgError> {
    if a.ncols() != w.len() {
        return Err(LinalgError::Shape {
            op: "scale_columns",
            left: dims(a),
            right: (w.len(), 1),
        });
    }
    let mut out = a.clone();
    for (j, mut col) in out.column_iter_mut().enumerate() {
        col *= w[j];
    }
    Ok(out)
}

/// Diagonal of `qᵗ · m · q`, i.e. `q_iᵗ m q_i` for every column `q_i`.
pub fn quadratic_diagonal(
    q: &DMatrix<f64>,
    m: &DMatrix<f64>,
) -> Result<DVector<f64>, LinalgError> {
    if !m.is_square() || m.nrows() != q.nrows() {
        return Err(LinalgError::Shape {
            op: "quadratic_diagonal",
            left: dims(q),
            right: dims(m),
        });
    }
    let mq = m * q;
    Ok(DVector::from_iterator(
        q.ncols(),
        q.column_iter()
            .zip(mq.column_iter())
            .map(|(qi, mqi)| qi.dot(&mqi)),
    ))
}

/// Inverse via LU with partial pivoting.
///
/// Returns `Singular` when the matrix is all zeros, when any pivot is within
/// `n · ε · max|m_ij|` of zero, or when the result is not finite.
pub fn invert(m: &DMatrix<f64>) -> Result<DMatrix<f64>, LinalgError> {
    if !m.is_square() {
        return Err(LinalgError::Shape {
            op: "invert",
            left: dims(m),
            right: dims(m),
        });
    }
    let n = m.nrows();
    if n == 0 {
        return Err(LinalgError::Singular);
    }
    let scale = m.amax();
    if !scale.is_finite() || scale == 0.0 {
        return Err(LinalgError::Singular);
    }
    let lu = m.clone().lu();
    let pivot_floor = n as f64 * PIVOT_EPS * scale;
    let u = lu.u();
    if (0..n).any(|i| u[(i, i)].abs() <= pivot_floor) {
        return Err(LinalgError::Singular);
    }
    let inv = lu.try_inverse().ok_or(LinalgError::Singular)?;
    if inv.iter().all(|v| v.is_finite()) {
        Ok(inv)
    } else {
        Err(LinalgError::Singular)
    }
}

/// Eigen-decomposition of a symmetric matrix.
#[derive(Clone, Debug)]
pub struct SymEigen {
    /// Eigenvalues in descending order.
    pub values: DVector<f64>,
    /// Orthonormal eigenvectors; column `k` pairs with `values[k]`.
    pub vectors: DMatrix<f64>,
}

/// Symmetric eigen-decomposition with eigenvalues sorted descending.
///
/// The input is symmetrised as `(a + aᵗ)/2` first. 2×2 inputs use a closed-form
/// Jacobi rotation; other sizes defer to `nalgebra::SymmetricEigen`.
pub fn symmetric_eigen(a: &DMatrix<f64>) -> Result<SymEigen, LinalgError> {
    if !a.is_square() {
        return Err(LinalgError::Shape {
            op: "symmetric_eigen",
            left: dims(a),
            right: dims(a),
        });
    }
    let sym = (a + a.transpose()) * 0.5;
    debug_assert!(
        (a - &sym).amax() <= SYM_EPS * a.amax().max(1.0),
        "symmetric_eigen called on a non-symmetric matrix"
    );
    if sym.nrows() == 2 {
        return Ok(eigen_2x2(sym[(0, 0)], sym[(0, 1)], sym[(1, 1)]));
    }
    let eig = SymmetricEigen::new(sym);
    let mut order: Vec<usize> = (0..eig.eigenvalues.len()).collect();
    order.sort_by(|&i, &j| eig.eigenvalues[j].total_cmp(&eig.eigenvalues[i]));
    let values = DVector::from_iterator(order.len(), order.iter().map(|&i| eig.eigenvalues[i]));
    let n = order.len();
    let vectors = DMatrix::from_fn(n, n, |r, c| eig.eigenvectors[(r, order[c])]);
    Ok(SymEigen { values, vectors })
}

/// `[[a, b], [b, c]]` diagonalised by the rotation θ = ½·atan2(2b, a − c).
fn eigen_2x2(a: f64, b: f64, c: f64) -> SymEigen {
    let mean = 0.5 * (a + c);
    let radius = (0.5 * (a - c)).hypot(b);
    let theta = 0.5 * (2.0 * b).atan2(a - c);
    let (s, co) = theta.sin_cos();
    SymEigen {
        values: DVector::from_vec(vec![mean + radius, mean - radius]),
        vectors: DMatrix::from_row_slice(2, 2, &[co, -s, s, co]),
    }
}
